/// A stricter constant used to determine if `f64`s are equivalent.
pub const STRICT_MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-6;

/// Constant used to determine if `f64`s are equivalent.
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-3;

/// Maximum distance a curve's aligned control points may deviate from the chord for the curve to still count as linear.
pub const MAX_LINEAR_DEVIATION: f64 = 1e-4;

/// Tolerance within which an intersection `t`-value is snapped to exactly `0.` or `1.` before range checking.
pub const T_VALUE_SNAP_EPSILON: f64 = 1e-5;

/// Default `t`-value used by the through-points constructors.
pub const DEFAULT_T_VALUE: f64 = 0.5;

/// Number of subdivisions used when building a lookup table without an explicit step count.
pub const DEFAULT_LUT_STEP_SIZE: usize = 100;

/// Default bounding-box size (width plus height) below which a subcurve is approximated by its chord during intersection search.
pub const DEFAULT_INTERSECTION_THRESHOLD: f64 = 0.5;

/// Default granularity at which `reduce` searches for simple subcurves.
pub const DEFAULT_REDUCE_STEP_SIZE: f64 = 0.01;

/// Maximum angle between the endpoint normals of a simple curve, 60 degrees in radians.
pub const MAX_SIMPLE_ENDPOINT_NORMAL_ANGLE: f64 = std::f64::consts::FRAC_PI_3;

/// Legendre-Gauss abscissae with n=24: the roots of the 24th order Legendre polynomial.
pub const GAUSS_LEGENDRE_ABSCISSAE: [f64; 24] = [
	-0.0640568928626056260850430826247450385909,
	0.0640568928626056260850430826247450385909,
	-0.1911188674736163091586398207570696318404,
	0.1911188674736163091586398207570696318404,
	-0.3150426796961633743867932913198102407864,
	0.3150426796961633743867932913198102407864,
	-0.4337935076260451384870842319133497124524,
	0.4337935076260451384870842319133497124524,
	-0.5454214713888395356583756172183723700107,
	0.5454214713888395356583756172183723700107,
	-0.6480936519369755692524957869107476266696,
	0.6480936519369755692524957869107476266696,
	-0.7401241915785543642438281030999784255232,
	0.7401241915785543642438281030999784255232,
	-0.8200019859739029219539498726697452080761,
	0.8200019859739029219539498726697452080761,
	-0.8864155270044010342131543419821967550873,
	0.8864155270044010342131543419821967550873,
	-0.9382745520027327585236490017087214496548,
	0.9382745520027327585236490017087214496548,
	-0.9747285559713094981983919930081690617411,
	0.9747285559713094981983919930081690617411,
	-0.9951872199970213601799974097007368118745,
	0.9951872199970213601799974097007368118745,
];

/// Legendre-Gauss weights with n=24, paired with [GAUSS_LEGENDRE_ABSCISSAE].
pub const GAUSS_LEGENDRE_WEIGHTS: [f64; 24] = [
	0.1279381953467521569740561652246953718517,
	0.1279381953467521569740561652246953718517,
	0.1258374563468282961213753825111836887264,
	0.1258374563468282961213753825111836887264,
	0.1216704729278033912044631534762624256070,
	0.1216704729278033912044631534762624256070,
	0.1155056680537256013533444839067835598622,
	0.1155056680537256013533444839067835598622,
	0.1074442701159656347825773424466062227946,
	0.1074442701159656347825773424466062227946,
	0.0976186521041138882698806644642471544279,
	0.0976186521041138882698806644642471544279,
	0.0861901615319532759171852029837426671850,
	0.0861901615319532759171852029837426671850,
	0.0733464814110803057340336152531165181193,
	0.0733464814110803057340336152531165181193,
	0.0592985849154367807463677585001085845412,
	0.0592985849154367807463677585001085845412,
	0.0442774388174198061686027482113382288593,
	0.0442774388174198061686027482113382288593,
	0.0285313886289336631813078159518782864491,
	0.0285313886289336631813078159518782864491,
	0.0123412297999871995468056670700372915759,
	0.0123412297999871995468056670700372915759,
];
