//! Canonical HLSL word and pattern tables.
//!
//! Each table is an ordered list of patterns for one classification group.
//! A pattern is either a literal identifier or a regular-expression fragment
//! using character classes and bounded repetition (`SV_Target[0-7]`,
//! `Load[234]?`). Anchoring to whole-word boundaries happens when the tables
//! are compiled, never here.

/// Scalar base names that expand into vector and matrix forms at build time:
/// `float` also accepts `float1`..`float4` and `float1x1`..`float4x4`.
pub const SCALAR_BASES: &[&str] = &[
    "bool",
    "dword",
    "int",
    "uint",
    "half",
    "float",
    "double",
    "min16float",
    "min10float",
    "min16int",
    "min12int",
    "min16uint",
];

/// Non-scalar type names: object types, resource views, samplers, streams.
pub const TYPES: &[&str] = &[
    "void",
    "string",
    "vector",
    "matrix",
    "texture",
    "Texture1D",
    "Texture1DArray",
    "Texture2D",
    "Texture2DArray",
    "Texture2DMS",
    "Texture2DMSArray",
    "Texture3D",
    "TextureCube",
    "TextureCubeArray",
    "RWTexture1D",
    "RWTexture1DArray",
    "RWTexture2D",
    "RWTexture2DArray",
    "RWTexture3D",
    "Buffer",
    "RWBuffer",
    "ByteAddressBuffer",
    "RWByteAddressBuffer",
    "StructuredBuffer",
    "RWStructuredBuffer",
    "AppendStructuredBuffer",
    "ConsumeStructuredBuffer",
    "ConstantBuffer",
    "sampler",
    "sampler1D",
    "sampler2D",
    "sampler3D",
    "samplerCUBE",
    "sampler_state",
    "SamplerState",
    "SamplerComparisonState",
    "InputPatch",
    "OutputPatch",
    "PointStream",
    "LineStream",
    "TriangleStream",
];

/// Storage classes, interpolation and parameter modifiers.
pub const QUALIFIERS: &[&str] = &[
    "in",
    "out",
    "inout",
    "uniform",
    "static",
    "extern",
    "const",
    "volatile",
    "precise",
    "shared",
    "groupshared",
    "row_major",
    "column_major",
    "nointerpolation",
    "linear",
    "centroid",
    "noperspective",
    "sample",
    "globallycoherent",
    "snorm",
    "unorm",
    "point",
    "line",
    "triangle",
    "lineadj",
    "triangleadj",
    "packoffset",
    "register",
];

/// Statement keywords, declaration keywords and semantic names.
///
/// Semantics carry bounded numeric suffixes (`SV_Target0`..`SV_Target7`,
/// `TEXCOORD` with an optional digit) and so are regex fragments rather than
/// plain words.
pub const KEYWORDS: &[&str] = &[
    "if",
    "else",
    "for",
    "while",
    "do",
    "switch",
    "case",
    "default",
    "break",
    "continue",
    "return",
    "discard",
    "struct",
    "typedef",
    "cbuffer",
    "tbuffer",
    "namespace",
    "interface",
    "technique",
    "technique10",
    "technique11",
    "pass",
    "compile",
    "true",
    "false",
    // System-value semantics
    "SV_Position",
    "SV_Target[0-7]",
    "SV_Depth",
    "SV_DepthGreaterEqual",
    "SV_DepthLessEqual",
    "SV_ClipDistance[0-9]?",
    "SV_CullDistance[0-9]?",
    "SV_Coverage",
    "SV_InstanceID",
    "SV_PrimitiveID",
    "SV_VertexID",
    "SV_SampleIndex",
    "SV_IsFrontFace",
    "SV_RenderTargetArrayIndex",
    "SV_ViewportArrayIndex",
    "SV_DispatchThreadID",
    "SV_GroupID",
    "SV_GroupIndex",
    "SV_GroupThreadID",
    "SV_DomainLocation",
    "SV_InsideTessFactor",
    "SV_OutputControlPointID",
    "SV_TessFactor",
    "SV_StencilRef",
    // Shader-model semantics
    "POSITION[0-9]?",
    "NORMAL[0-9]?",
    "TEXCOORD[0-9]?",
    "COLOR[0-9]?",
    "TANGENT[0-9]?",
    "BINORMAL[0-9]?",
    "BLENDINDICES[0-9]?",
    "BLENDWEIGHT[0-9]?",
    "PSIZE[0-9]?",
    "FOG",
    "DEPTH",
    "VFACE",
    "VPOS",
];

/// C++ words HLSL reserves for future use. Using one is an error in fxc, so
/// they classify separately from ordinary keywords.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "auto",
    "catch",
    "char",
    "class",
    "const_cast",
    "delete",
    "dynamic_cast",
    "enum",
    "explicit",
    "friend",
    "goto",
    "long",
    "mutable",
    "new",
    "operator",
    "private",
    "protected",
    "public",
    "reinterpret_cast",
    "short",
    "signed",
    "sizeof",
    "static_cast",
    "template",
    "this",
    "throw",
    "try",
    "typename",
    "union",
    "unsigned",
    "using",
    "virtual",
];

/// Intrinsic functions, including method-style resource intrinsics.
pub const BUILTINS: &[&str] = &[
    "abort",
    "abs",
    "acos",
    "all",
    "any",
    "asdouble",
    "asfloat",
    "asin",
    "asint",
    "asuint",
    "atan",
    "atan2",
    "ceil",
    "clamp",
    "clip",
    "cos",
    "cosh",
    "countbits",
    "cross",
    "ddx",
    "ddx_coarse",
    "ddx_fine",
    "ddy",
    "ddy_coarse",
    "ddy_fine",
    "degrees",
    "determinant",
    "distance",
    "dot",
    "dst",
    "errorf",
    "exp",
    "exp2",
    "f16tof32",
    "f32tof16",
    "faceforward",
    "firstbithigh",
    "firstbitlow",
    "floor",
    "fma",
    "fmod",
    "frac",
    "frexp",
    "fwidth",
    "isfinite",
    "isinf",
    "isnan",
    "ldexp",
    "length",
    "lerp",
    "lit",
    "log",
    "log10",
    "log2",
    "mad",
    "max",
    "min",
    "modf",
    "msad4",
    "mul",
    "noise",
    "normalize",
    "pow",
    "printf",
    "radians",
    "rcp",
    "reflect",
    "refract",
    "reversebits",
    "round",
    "rsqrt",
    "saturate",
    "sign",
    "sin",
    "sincos",
    "sinh",
    "smoothstep",
    "sqrt",
    "step",
    "tan",
    "tanh",
    "transpose",
    "trunc",
    "GetRenderTargetSampleCount",
    "GetRenderTargetSamplePosition",
    // Barriers and atomics
    "AllMemoryBarrier",
    "AllMemoryBarrierWithGroupSync",
    "DeviceMemoryBarrier",
    "DeviceMemoryBarrierWithGroupSync",
    "GroupMemoryBarrier",
    "GroupMemoryBarrierWithGroupSync",
    "InterlockedAdd",
    "InterlockedAnd",
    "InterlockedCompareExchange",
    "InterlockedCompareStore",
    "InterlockedExchange",
    "InterlockedMax",
    "InterlockedMin",
    "InterlockedOr",
    "InterlockedXor",
    // Resource methods
    "Load[234]?",
    "Sample",
    "SampleBias",
    "SampleCmp",
    "SampleCmpLevelZero",
    "SampleGrad",
    "SampleLevel",
    "Gather",
    "GatherRed",
    "GatherGreen",
    "GatherBlue",
    "GatherAlpha",
    "GetDimensions",
    "CalculateLevelOfDetail",
    "CalculateLevelOfDetailUnclamped",
    "Append",
    "Consume",
    "IncrementCounter",
    "DecrementCounter",
];

/// Deprecated D3D9-era texture sampling intrinsics.
pub const DEPRECATED_BUILTINS: &[&str] = &[
    "tex1D(?:bias|grad|lod|proj)?",
    "tex2D(?:bias|grad|lod|proj)?",
    "tex3D(?:bias|grad|lod|proj)?",
    "texCUBE(?:bias|grad|lod|proj)?",
    "D3DCOLORtoUBYTE4",
];

// Empty by design: nothing in the language data populates these groups, and
// an empty table simply never matches.
pub const DEPRECATED_QUALIFIERS: &[&str] = &[];
pub const DEPRECATED_KEYWORDS: &[&str] = &[];
pub const DEPRECATED_VARIABLES: &[&str] = &[];

/// Preprocessor directive words, valid after a line-leading `#`.
pub const PREPROCESSOR_DIRECTIVES: &[&str] = &[
    "define", "undef", "if", "ifdef", "ifndef", "else", "elif", "endif",
    "include", "line", "error", "warning", "pragma",
];

/// Operators valid only inside preprocessor conditions.
pub const PREPROCESSOR_OPERATORS: &[&str] = &["defined"];

/// Predefined macros, valid in any expression context.
pub const PREPROCESSOR_BUILTINS: &[&str] = &["__FILE__", "__LINE__"];

/// Expand the scalar bases into bare, vector and matrix patterns.
///
/// `float` yields `float`, `float[1-4]` and `float[1-4]x[1-4]`, so both
/// dimensions are bounded to 1..=4. Run once per table build.
pub fn expand_scalar_types() -> Vec<String> {
    let mut patterns = Vec::with_capacity(SCALAR_BASES.len() * 3);
    for base in SCALAR_BASES {
        patterns.push((*base).to_string());
        patterns.push(format!("{base}[1-4]"));
        patterns.push(format!("{base}[1-4]x[1-4]"));
    }
    patterns
}
