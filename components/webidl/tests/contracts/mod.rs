//! Contract tests for the public conversion surface.

use core_types::{JsObject, Symbol, Value};
use webidl::{
    convert_to_int, dom_string, value_type, Capability, ConversionOptions, Converter, EnumConverter,
    ErrorCode, IntegerBounds, IntegerType, InterfaceConverter, SequenceConverter, ValueType,
    WebIdlError, MAX_SAFE_INTEGER,
};

#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default())
        .is_test(true)
        .try_init();
}

fn assert_invalid_value(result: Result<impl std::fmt::Debug, WebIdlError>) -> WebIdlError {
    let err = result.expect_err("conversion should fail");
    assert_eq!(err.code(), Some(&ErrorCode::InvalidArgValue), "{err}");
    err
}

fn assert_type_mismatch(result: Result<impl std::fmt::Debug, WebIdlError>) -> WebIdlError {
    let err = result.expect_err("conversion should fail");
    assert_eq!(err.code(), Some(&ErrorCode::InvalidArgType), "{err}");
    err
}

#[cfg(test)]
mod bounds_contract {
    use super::*;

    #[test]
    fn test_ranges_for_every_width() {
        for bits in [8u32, 16, 32] {
            let unsigned = IntegerBounds::new(bits, false);
            assert_eq!(unsigned.lower, 0.0);
            assert_eq!(unsigned.upper, 2f64.powi(bits as i32) - 1.0);

            let signed = IntegerBounds::new(bits, true);
            assert_eq!(signed.lower, -(2f64.powi(bits as i32 - 1)));
            assert_eq!(signed.upper, 2f64.powi(bits as i32 - 1) - 1.0);
        }
    }

    #[test]
    fn test_sixty_four_bit_ranges_are_safe_integers() {
        let unsigned = IntegerBounds::new(64, false);
        assert_eq!((unsigned.lower, unsigned.upper), (0.0, MAX_SAFE_INTEGER));
        let signed = IntegerBounds::new(64, true);
        assert_eq!(signed.lower, -MAX_SAFE_INTEGER);
        assert_eq!(signed.upper, MAX_SAFE_INTEGER);
    }

    #[test]
    fn test_named_types_match_bounds() {
        for ty in IntegerType::ALL {
            let expected = IntegerBounds::new(ty.bit_length(), ty.is_signed());
            assert_eq!(ty.converter().bounds(), expected, "{ty}");
        }
    }
}

#[cfg(test)]
mod integer_contract {
    use super::*;

    fn to_int(v: impl Into<Value>, opts: ConversionOptions) -> Result<f64, WebIdlError> {
        convert_to_int("x", &v.into(), 8, &opts)
    }

    #[test]
    fn test_wraps_by_default() {
        let signed = ConversionOptions::default().with_signed(true);
        assert_eq!(to_int(256, ConversionOptions::default()).unwrap(), 0.0);
        assert_eq!(to_int(-1, signed).unwrap(), -1.0);
    }

    #[test]
    fn test_enforce_range() {
        let enforce = ConversionOptions::default().with_enforce_range(true);
        let err = assert_invalid_value(to_int(300, enforce.clone()));
        assert_eq!(err.message(), "The argument 'x' is invalid. Received 300");
        assert_invalid_value(to_int(f64::NAN, enforce));
    }

    #[test]
    fn test_clamp_ties_to_even() {
        let clamp = ConversionOptions::default().with_clamp(true);
        assert_eq!(to_int(2.5, clamp.clone()).unwrap(), 2.0);
        assert_eq!(to_int(3.5, clamp).unwrap(), 4.0);
    }

    #[test]
    fn test_nan_is_zero() {
        assert_eq!(to_int(f64::NAN, ConversionOptions::default()).unwrap(), 0.0);
    }

    #[test]
    fn test_never_returns_negative_zero() {
        let signed = ConversionOptions::default().with_signed(true);
        for (v, opts) in [
            (-0.0, ConversionOptions::default()),
            (-0.4, ConversionOptions::default()),
            (-0.5, signed.clone().with_clamp(true)),
            (-256.0, ConversionOptions::default()),
            (-0.9, signed.with_enforce_range(true)),
        ] {
            let out = to_int(v, opts).unwrap();
            assert_eq!(out, 0.0);
            assert!(out.is_sign_positive(), "{v} produced -0");
        }
    }

    #[test]
    fn test_results_stay_in_range() {
        // unsigned 64-bit results wrap modulo 2^64 and may exceed the safe range
        for ty in IntegerType::ALL.into_iter().filter(|t| t.bit_length() < 64) {
            let conv = ty.converter();
            let bounds = conv.bounds();
            for v in [-1e300, -4294967297.5, -129.0, -0.5, 0.0, 1.5, 255.0, 65537.0, 1e17, 1e300] {
                let out = conv.convert(&Value::Double(v), &ConversionOptions::default()).unwrap();
                assert!(bounds.contains(out), "{ty}: {v} -> {out}");
                assert_eq!(out.trunc(), out);
            }
        }
    }

    #[test]
    fn test_unsigned_sixty_four_bit_wrap_leaves_safe_range() {
        let out = convert_to_int("x", &Value::Smi(-3), 64, &ConversionOptions::default()).unwrap();
        assert_eq!(out, 18446744073709551616.0);
        assert!(!IntegerBounds::new(64, false).contains(out));
    }

    #[test]
    fn test_converted_values_are_fixed_points() {
        for ty in IntegerType::ALL {
            for conv in [ty.converter(), ty.converter().clamp(), ty.converter().enforce_range()] {
                let opts = ConversionOptions::default();
                for v in [-70000.25, -3.0, 0.0, 7.5, 200.0, 1e6] {
                    let Ok(once) = conv.convert(&Value::Double(v), &opts) else {
                        continue;
                    };
                    if !conv.bounds().contains(once) {
                        continue;
                    }
                    let twice = conv.convert(&Value::Double(once), &opts).unwrap();
                    assert_eq!(once, twice, "{ty}: {v}");
                }
            }
        }
    }
}

#[cfg(test)]
mod enum_contract {
    use super::*;

    #[test]
    fn test_members_pass_and_others_fail() {
        let conv = EnumConverter::new("Letter", ["a", "b"]);
        let opts = ConversionOptions::default();
        assert_eq!(conv.convert(&"a".into(), &opts).unwrap(), "a");
        let err = assert_invalid_value(conv.convert(&"c".into(), &opts));
        assert!(err.message().contains("'c'"));
    }
}

#[cfg(test)]
mod sequence_contract {
    use super::*;

    #[test]
    fn test_empty_iterable() {
        let seq = SequenceConverter::new(IntegerType::Long.converter());
        let empty = Value::Object(JsObject::array(vec![]));
        let out = seq.convert(&empty, &ConversionOptions::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_element_failure_carries_index() {
        let seq = SequenceConverter::new(IntegerType::Long.converter().enforce_range());
        let input = Value::Object(JsObject::array(vec![Value::Smi(1), "x".into()]));
        let err = assert_invalid_value(seq.convert(&input, &ConversionOptions::default()));
        assert_eq!(
            err.message(),
            "The argument 'Value[1]' is invalid. Received NaN"
        );
    }

    #[test]
    fn test_non_iterables_are_type_errors() {
        let seq = SequenceConverter::new(IntegerType::Long.converter());
        let opts = ConversionOptions::default().with_context("Argument 1");
        for v in [Value::Null, Value::Smi(1), "abc".into(), Value::Object(JsObject::new())] {
            let err = assert_type_mismatch(seq.convert(&v, &opts));
            assert_eq!(
                err.message(),
                "Argument 1 can not be converted to sequence."
            );
        }
    }
}

#[cfg(test)]
mod interface_contract {
    use super::*;

    #[test]
    fn test_identity_is_preserved() {
        let proto = JsObject::new();
        let conv = InterfaceConverter::new("Blob", Capability::Prototype(proto.clone()));
        let blob = JsObject::with_prototype(&proto);
        let out = conv
            .convert(&Value::Object(blob.clone()), &ConversionOptions::default())
            .unwrap();
        let out = out.as_object().unwrap();
        assert!(out.ptr_eq(&blob));

        // mutation through the result is visible through the original handle
        out.set("size", Value::Smi(4));
        assert_eq!(blob.get("size"), Some(Value::Smi(4)));
    }

    #[test]
    fn test_non_conforming_is_type_mismatch() {
        let conv = InterfaceConverter::new("Blob", Capability::Brand("Blob".into()));
        assert_type_mismatch(conv.convert(&"blob".into(), &ConversionOptions::default()));
    }
}

#[cfg(test)]
mod dom_string_contract {
    use super::*;

    #[test]
    fn test_standard_string_forms() {
        assert_eq!(dom_string(&Value::Null).unwrap(), "null");
        assert_eq!(dom_string(&Value::Undefined).unwrap(), "undefined");
        assert_eq!(dom_string(&Value::Double(-0.0)).unwrap(), "0");
        assert_eq!(dom_string(&Value::Double(0.1)).unwrap(), "0.1");
        assert_eq!(dom_string(&Value::Double(f64::NAN)).unwrap(), "NaN");
    }

    #[test]
    fn test_symbol_is_invalid_value() {
        assert_invalid_value(dom_string(&Value::Symbol(Symbol::new(Some("tag")))));
    }
}

#[cfg(test)]
mod classify_contract {
    use super::*;

    #[test]
    fn test_every_value_has_a_category() {
        let cases = [
            (Value::Undefined, ValueType::Undefined),
            (Value::Null, ValueType::Null),
            (Value::Boolean(false), ValueType::Boolean),
            (Value::Smi(1), ValueType::Number),
            (Value::Double(f64::NAN), ValueType::Number),
            ("".into(), ValueType::String),
            (Value::Symbol(Symbol::new(None)), ValueType::Symbol),
            (Value::Object(JsObject::new()), ValueType::Object),
            (Value::NativeFunction("f".into()), ValueType::Object),
        ];
        for (value, expected) in cases {
            assert_eq!(value_type(&value), expected, "{value:?}");
        }
    }
}

#[cfg(test)]
mod options_contract {
    use super::*;

    #[test]
    fn test_options_deserialize_from_camel_case() {
        let opts: ConversionOptions = serde_json::from_str(
            r#"{"enforceRange": true, "prefix": "Failed to execute 'fill'"}"#,
        )
        .unwrap();
        let err = convert_to_int("start", &Value::Smi(-1), 32, &opts).unwrap_err();
        assert_eq!(
            err.message(),
            "Failed to execute 'fill': The argument 'start' is invalid. Received -1"
        );
    }

    #[test]
    fn test_code_override() {
        let opts: ConversionOptions =
            serde_json::from_str(r#"{"code": "ERR_INVALID_ARG_VALUE"}"#).unwrap();
        let seq = SequenceConverter::new(IntegerType::Long.converter());
        assert_invalid_value(seq.convert(&Value::Null, &opts));

        // interface and enum errors keep their own kind
        let conv = InterfaceConverter::new("Blob", Capability::Brand("Blob".into()));
        assert_type_mismatch(conv.convert(&Value::Null, &opts));
        let opts = opts.with_code(ErrorCode::InvalidArgType);
        assert_invalid_value(EnumConverter::new("E", ["a"]).convert(&"b".into(), &opts));
    }
}
