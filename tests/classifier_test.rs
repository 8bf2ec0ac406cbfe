//! Classifier test suite.
//!
//! Table-driven coverage of every lexicon category, the scalar type
//! expansion bounds, precedence between overlapping tables, and the
//! extension points.

use pretty_assertions::assert_eq;
use test_case::test_case;

use hlslex::lexicon::tables;
use hlslex::{Category, CompiledLexicon, LexiconBuilder, LexiconError, ScanContext};

fn standard() -> CompiledLexicon {
    CompiledLexicon::standard().expect("base tables must compile")
}

#[test_case("float" ; "scalar")]
#[test_case("uint" ; "uint scalar")]
#[test_case("float2" ; "vector")]
#[test_case("float4x4" ; "matrix")]
#[test_case("min16float3" ; "minimum precision vector")]
#[test_case("Texture2DArray" ; "texture object")]
#[test_case("RWStructuredBuffer" ; "uav object")]
#[test_case("SamplerComparisonState" ; "sampler object")]
#[test_case("matrix" ; "generic matrix")]
fn classifies_types(lexeme: &str) {
    assert_eq!(standard().classify(lexeme), Category::Type);
}

#[test_case("in")]
#[test_case("inout")]
#[test_case("groupshared")]
#[test_case("row_major")]
#[test_case("nointerpolation")]
#[test_case("register")]
fn classifies_qualifiers(lexeme: &str) {
    assert_eq!(standard().classify(lexeme), Category::Qualifier);
}

#[test_case("if")]
#[test_case("discard")]
#[test_case("cbuffer")]
#[test_case("technique11")]
#[test_case("SV_Position" ; "system value semantic")]
#[test_case("SV_Target3" ; "render target semantic")]
#[test_case("SV_DispatchThreadID" ; "compute semantic")]
#[test_case("TEXCOORD" ; "legacy semantic bare")]
#[test_case("TEXCOORD7" ; "legacy semantic numbered")]
#[test_case("COLOR0" ; "color semantic")]
fn classifies_keywords(lexeme: &str) {
    assert_eq!(standard().classify(lexeme), Category::Keyword);
}

#[test_case("class")]
#[test_case("template")]
#[test_case("reinterpret_cast")]
#[test_case("sizeof")]
#[test_case("virtual")]
fn classifies_reserved_keywords(lexeme: &str) {
    assert_eq!(standard().classify(lexeme), Category::ReservedKeyword);
}

#[test_case("lerp")]
#[test_case("saturate")]
#[test_case("atan2")]
#[test_case("InterlockedAdd")]
#[test_case("GroupMemoryBarrierWithGroupSync")]
#[test_case("Load" ; "resource load bare")]
#[test_case("Load2" ; "resource load raw two")]
#[test_case("SampleCmpLevelZero")]
fn classifies_builtins(lexeme: &str) {
    assert_eq!(standard().classify(lexeme), Category::Builtin);
}

#[test_case("tex2D")]
#[test_case("tex2Dlod")]
#[test_case("texCUBEproj")]
#[test_case("D3DCOLORtoUBYTE4")]
fn classifies_deprecated_builtins(lexeme: &str) {
    assert_eq!(standard().classify(lexeme), Category::DeprecatedBuiltin);
}

#[test_case("__LINE__")]
#[test_case("__FILE__")]
fn classifies_preprocessor_builtins(lexeme: &str) {
    assert_eq!(standard().classify(lexeme), Category::PreprocessorBuiltin);
}

/// Every literal word in a base table round-trips to its own category,
/// except where an earlier table deliberately shadows it.
#[test]
fn all_base_words_hit_their_tables() {
    let lexicon = standard();
    for word in tables::QUALIFIERS {
        assert_eq!(lexicon.classify(word), Category::Qualifier, "{word}");
    }
    for word in tables::RESERVED_KEYWORDS {
        assert_eq!(lexicon.classify(word), Category::ReservedKeyword, "{word}");
    }
    for word in tables::TYPES {
        assert_eq!(lexicon.classify(word), Category::Type, "{word}");
    }
    for word in tables::BUILTINS {
        if word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            assert_eq!(lexicon.classify(word), Category::Builtin, "{word}");
        }
    }
}

mod scalar_expansion {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dimensions_one_through_four_are_types() {
        let lexicon = standard();
        for base in tables::SCALAR_BASES {
            assert_eq!(lexicon.classify(base), Category::Type, "{base}");
            assert_eq!(
                lexicon.classify(&format!("{base}1")),
                Category::Type,
                "{base}1"
            );
            assert_eq!(
                lexicon.classify(&format!("{base}2")),
                Category::Type,
                "{base}2"
            );
            assert_eq!(
                lexicon.classify(&format!("{base}3x4")),
                Category::Type,
                "{base}3x4"
            );
            assert_eq!(
                lexicon.classify(&format!("{base}4x1")),
                Category::Type,
                "{base}4x1"
            );
        }
    }

    #[test]
    fn out_of_range_dimensions_are_identifiers() {
        let lexicon = standard();
        for base in tables::SCALAR_BASES {
            assert_eq!(
                lexicon.classify(&format!("{base}5")),
                Category::Identifier,
                "{base}5"
            );
            assert_eq!(
                lexicon.classify(&format!("{base}0")),
                Category::Identifier,
                "{base}0"
            );
            assert_eq!(
                lexicon.classify(&format!("{base}2x5")),
                Category::Identifier,
                "{base}2x5"
            );
            assert_eq!(
                lexicon.classify(&format!("{base}0x2")),
                Category::Identifier,
                "{base}0x2"
            );
        }
    }
}

mod precedence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn semantic_suffix_ranges_are_strict() {
        let lexicon = standard();
        assert_eq!(lexicon.classify("SV_Target0"), Category::Keyword);
        assert_eq!(lexicon.classify("SV_Target7"), Category::Keyword);
        assert_eq!(lexicon.classify("SV_Target9"), Category::Identifier);
        assert_eq!(lexicon.classify("COLOR12"), Category::Identifier);
    }

    #[test]
    fn word_boundaries_prevent_prefix_matches() {
        let lexicon = standard();
        assert_eq!(lexicon.classify("int"), Category::Type);
        assert_eq!(lexicon.classify("integer"), Category::Identifier);
        assert_eq!(lexicon.classify("interface"), Category::Keyword);
        assert_eq!(lexicon.classify("sample"), Category::Qualifier);
        assert_eq!(lexicon.classify("sampler"), Category::Type);
        assert_eq!(lexicon.classify("samplers"), Category::Identifier);
    }

    #[test]
    fn directive_words_fall_back_outside_hash_lines() {
        let lexicon = standard();
        assert_eq!(lexicon.classify("pragma"), Category::Identifier);
        assert_eq!(
            lexicon.classify_at("pragma", ScanContext::PreprocessorLine),
            Category::PreprocessorDirective
        );
        // `line` is a qualifier normally and a directive on a hash line.
        assert_eq!(lexicon.classify("line"), Category::Qualifier);
        assert_eq!(
            lexicon.classify_at("line", ScanContext::PreprocessorLine),
            Category::PreprocessorDirective
        );
    }
}

mod extension {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn additional_words_classify_after_build() {
        let extended = LexiconBuilder::new()
            .types(["Foo"])
            .build()
            .unwrap();
        assert_eq!(extended.classify("Foo"), Category::Type);

        let plain = standard();
        assert_eq!(plain.classify("Foo"), Category::Identifier);
    }

    #[test]
    fn extension_words_do_not_disturb_base_tables() {
        let lexicon = LexiconBuilder::new()
            .keywords(["loop", "unroll", "branch", "flatten"])
            .build()
            .unwrap();
        assert_eq!(lexicon.classify("unroll"), Category::Keyword);
        assert_eq!(lexicon.classify("float3"), Category::Type);
        assert_eq!(lexicon.classify("lerp"), Category::Builtin);
    }

    #[test]
    fn invalid_extension_pattern_names_the_entry() {
        let err = LexiconBuilder::new()
            .builtins(["Wave(", "valid"])
            .build()
            .unwrap_err();
        match err {
            LexiconError::InvalidPattern {
                category, pattern, ..
            } => {
                assert_eq!(category, Category::Builtin);
                assert_eq!(pattern, "Wave(");
            }
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn generic_extend_rejects_tableless_categories() {
        for category in [
            Category::Whitespace,
            Category::Punctuation,
            Category::NumberLiteral,
            Category::PreprocessorDirective,
        ] {
            let err = LexiconBuilder::new()
                .extend(category, ["word"])
                .unwrap_err();
            assert_eq!(err, LexiconError::EmptyCategory { category });
        }
    }
}
