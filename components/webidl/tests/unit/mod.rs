use core_types::{HostIterator, IteratorResult, JsObject, JsResult, Symbol, Value};
use helpers::*;
use webidl::{
    convert_to_int, Any, Boolean, Capability, ConversionOptions, Converter, DomString,
    EnumConverter, ErrorCode, IntegerType, InterfaceConverter, NullableConverter, SequenceConverter,
    WebIdlResult,
};

// Initialize logger for this test binary so `RUST_LOG` is honored.
#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default())
        .is_test(true)
        .try_init();
}

mod helpers {
    use super::*;

    pub fn int(value: impl Into<Value>, bits: u32, opts: &ConversionOptions) -> f64 {
        convert_to_int("x", &value.into(), bits, opts).expect("conversion should succeed")
    }

    pub fn array(values: Vec<Value>) -> Value {
        Value::Object(JsObject::array(values))
    }
}

#[cfg(test)]
mod integer_tests {
    use super::*;

    #[test]
    fn test_unsigned_wraps() {
        let opts = ConversionOptions::default();
        assert_eq!(int(256, 8, &opts), 0.0);
        assert_eq!(int(257, 8, &opts), 1.0);
        assert_eq!(int(-1, 8, &opts), 255.0);
        assert_eq!(int(65536 + 7, 16, &opts), 7.0);
    }

    #[test]
    fn test_signed_wraps() {
        let opts = ConversionOptions::default().with_signed(true);
        assert_eq!(int(-1, 8, &opts), -1.0);
        assert_eq!(int(128, 8, &opts), -128.0);
        assert_eq!(int(255, 8, &opts), -1.0);
        assert_eq!(int(-129, 8, &opts), 127.0);
    }

    #[test]
    fn test_non_finite_becomes_zero() {
        let opts = ConversionOptions::default();
        assert_eq!(int(f64::NAN, 32, &opts), 0.0);
        assert_eq!(int(f64::INFINITY, 32, &opts), 0.0);
        let signed = opts.clone().with_signed(true);
        assert_eq!(int(f64::NEG_INFINITY, 32, &signed), 0.0);
    }

    #[test]
    fn test_non_number_inputs_use_to_number() {
        let opts = ConversionOptions::default();
        assert_eq!(int("42", 32, &opts), 42.0);
        assert_eq!(int("  0b11 ", 32, &opts), 3.0);
        assert_eq!(int(true, 8, &opts), 1.0);
        assert_eq!(int(Value::Null, 8, &opts), 0.0);
        assert_eq!(int(Value::Undefined, 8, &opts), 0.0);
        assert_eq!(int(array(vec![Value::Smi(9)]), 8, &opts), 9.0);
    }

    #[test]
    fn test_only_ecmascript_whitespace_is_trimmed() {
        let opts = ConversionOptions::default();
        assert_eq!(int("\u{A0}5\u{2028}", 8, &opts), 5.0);
        // NEL is Unicode whitespace but not ECMAScript whitespace, so ToNumber gives NaN
        assert_eq!(int("\u{85}5", 8, &opts), 0.0);
    }

    #[test]
    fn test_symbol_input_is_a_host_error() {
        let opts = ConversionOptions::default();
        let err = convert_to_int("x", &Value::Symbol(Symbol::new(None)), 8, &opts).unwrap_err();
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), "Cannot convert a Symbol value to a number");
    }

    #[test]
    fn test_enforce_range_rejects() {
        let opts = ConversionOptions::default().with_enforce_range(true);
        for v in [300.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = convert_to_int("x", &Value::Double(v), 8, &opts).unwrap_err();
            assert_eq!(err.code(), Some(&ErrorCode::InvalidArgValue));
        }
    }

    #[test]
    fn test_enforce_range_truncates_in_range_values() {
        let opts = ConversionOptions::default().with_enforce_range(true);
        assert_eq!(int(255.9, 8, &opts), 255.0);
        assert_eq!(int(-0.9, 8, &opts), 0.0);
    }

    #[test]
    fn test_enforce_range_message() {
        let opts = ConversionOptions::default()
            .with_enforce_range(true)
            .with_prefix("Failed to execute 'seek'");
        let err = convert_to_int("offset", &Value::Double(1e10), 32, &opts).unwrap_err();
        assert_eq!(
            err.message(),
            "Failed to execute 'seek': The argument 'offset' is invalid. Received 10000000000"
        );
    }

    #[test]
    fn test_enforce_range_takes_precedence_over_clamp() {
        let opts = ConversionOptions::default()
            .with_enforce_range(true)
            .with_clamp(true);
        assert!(convert_to_int("x", &Value::Smi(300), 8, &opts).is_err());
        assert_eq!(int(200, 8, &opts), 200.0);
    }

    #[test]
    fn test_clamp_rounds_half_to_even() {
        let opts = ConversionOptions::default().with_clamp(true);
        assert_eq!(int(2.5, 8, &opts), 2.0);
        assert_eq!(int(3.5, 8, &opts), 4.0);
        assert_eq!(int(254.5, 8, &opts), 254.0);
        assert_eq!(int(1.4, 8, &opts), 1.0);
        assert_eq!(int(1.6, 8, &opts), 2.0);
    }

    #[test]
    fn test_clamp_signed_range() {
        let opts = ConversionOptions::default()
            .with_clamp(true)
            .with_signed(true);
        assert_eq!(int(-1000, 8, &opts), -128.0);
        assert_eq!(int(1000, 8, &opts), 127.0);
        assert_eq!(int(-2.5, 8, &opts), -2.0);
    }

    #[test]
    fn test_sixty_four_bit_bounds() {
        let opts = ConversionOptions::default().with_enforce_range(true);
        let above = Value::Double(9007199254740992.0);
        assert_eq!(int(9007199254740991.0, 64, &opts), 9007199254740991.0);
        assert!(convert_to_int("x", &above, 64, &opts).is_err());
        let signed = opts.with_signed(true);
        let below = Value::Double(-9007199254740992.0);
        assert_eq!(int(-9007199254740991.0, 64, &signed), -9007199254740991.0);
        assert!(convert_to_int("x", &below, 64, &signed).is_err());
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let signed = ConversionOptions::default().with_signed(true);
        let cases = [
            (ConversionOptions::default(), 8),
            (signed.clone(), 16),
            (ConversionOptions::default().with_clamp(true), 32),
            (signed.with_clamp(true), 64),
        ];
        for (opts, bits) in cases {
            for v in [-1e12, -300.5, -1.0, 0.0, 2.5, 77.0, 65535.0, 1e15] {
                let once = int(v, bits, &opts);
                assert_eq!(int(once, bits, &opts), once, "{v} with {bits} bits");
            }
        }
    }

    #[test]
    fn test_named_types() {
        let opts = ConversionOptions::default();
        let long: IntegerType = "long".parse().unwrap();
        let out = long
            .converter()
            .convert(&Value::Double(2147483648.0), &opts);
        assert_eq!(out.unwrap(), -2147483648.0);
        let unsigned_long: IntegerType = "unsigned long".parse().unwrap();
        assert_eq!(unsigned_long.bit_length(), 32);
        assert!(!unsigned_long.is_signed());
        let out = unsigned_long.converter().convert(&Value::Smi(-1), &opts);
        assert_eq!(out.unwrap(), 4294967295.0);
    }
}

#[cfg(test)]
mod scalar_tests {
    use super::*;

    #[test]
    fn test_dom_string() {
        let opts = ConversionOptions::default();
        assert_eq!(DomString.convert(&Value::Null, &opts).unwrap(), "null");
        let big = Value::Double(1e21);
        assert_eq!(DomString.convert(&big, &opts).unwrap(), "1e+21");
        let pair = array(vec![1.into(), 2.into()]);
        assert_eq!(DomString.convert(&pair, &opts).unwrap(), "1,2");
        let sym = Value::Symbol(Symbol::new(None));
        assert!(DomString.convert(&sym, &opts).is_err());
    }

    #[test]
    fn test_any_and_boolean() {
        let opts = ConversionOptions::default();
        let sym = Value::Symbol(Symbol::new(Some("s")));
        assert_eq!(Any.convert(&sym, &opts).unwrap(), sym);
        assert!(Boolean.convert(&Value::Double(0.5), &opts).unwrap());
        assert!(!Boolean.convert(&Value::Double(-0.0), &opts).unwrap());
    }
}

#[cfg(test)]
mod factory_tests {
    use super::*;

    struct Endless(u32);

    impl HostIterator for Endless {
        fn next(&mut self) -> JsResult<Value> {
            self.0 += 1;
            Ok(IteratorResult::value(Value::Smi(self.0 as i32)).to_value())
        }
    }

    /// Yields `{ done: true }` after three values and must not be asked again.
    struct Counted {
        calls: u32,
    }

    impl HostIterator for Counted {
        fn next(&mut self) -> JsResult<Value> {
            self.calls += 1;
            assert!(self.calls <= 4, "iterator consumed past done");
            if self.calls == 4 {
                return Ok(IteratorResult::done().to_value());
            }
            let n = Value::Smi(self.calls as i32);
            Ok(IteratorResult::value(n).to_value())
        }
    }

    #[test]
    fn test_sequence_stops_at_done() {
        let seq = SequenceConverter::new(IntegerType::Long.converter());
        let iterable = JsObject::iterable(|_| Box::new(Counted { calls: 0 }));
        let out = seq
            .convert(&Value::Object(iterable), &ConversionOptions::default())
            .unwrap();
        assert_eq!(out, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sequence_element_errors_stop_iteration() {
        // the element converter fails on the fourth element of an endless iterator
        let small = |v: &Value, o: &ConversionOptions| -> WebIdlResult<f64> {
            IntegerType::Octet.converter().enforce_range().convert(v, o)
        };
        let limited = |v: &Value, o: &ConversionOptions| -> WebIdlResult<f64> {
            let n = small.convert(v, o)?;
            if n > 3.0 {
                return Err(webidl::make_exception("is too large.", o));
            }
            Ok(n)
        };
        let seq = SequenceConverter::new(limited);
        let iterable = JsObject::iterable(|_| Box::new(Endless(0)));
        let err = seq
            .convert(&Value::Object(iterable), &ConversionOptions::default())
            .unwrap_err();
        assert_eq!(err.message(), "Value[3] is too large.");
    }

    #[test]
    fn test_nested_sequences_report_full_path() {
        let matrix = SequenceConverter::new(SequenceConverter::new(DomString));
        let input = array(vec![
            array(vec!["a".into()]),
            array(vec!["b".into(), Value::Symbol(Symbol::new(None))]),
        ]);
        let opts = ConversionOptions::default().with_context("rows");
        let err = matrix.convert(&input, &opts).unwrap_err();
        assert_eq!(err.code(), Some(&ErrorCode::InvalidArgValue));

        let enums = SequenceConverter::new(SequenceConverter::new(EnumConverter::new("E", ["a"])));
        let err = enums.convert(&input, &opts).unwrap_err();
        assert!(err.message().starts_with("rows[1][0] value 'b'"));
    }

    #[test]
    fn test_nullable_sequence() {
        let maybe_list = NullableConverter::new(SequenceConverter::new(Boolean));
        let opts = ConversionOptions::default();
        assert_eq!(maybe_list.convert(&Value::Undefined, &opts).unwrap(), None);
        let list = array(vec![Value::Smi(0)]);
        let out = maybe_list.convert(&list, &opts).unwrap();
        assert_eq!(out, Some(vec![false]));
        assert!(maybe_list.convert(&Value::Smi(0), &opts).is_err());
    }

    #[test]
    fn test_sequence_of_interfaces_keeps_references() {
        let proto = JsObject::new();
        let a = JsObject::with_prototype(&proto);
        let b = JsObject::with_prototype(&proto);
        let port = InterfaceConverter::new("Port", Capability::Prototype(proto));
        let seq = SequenceConverter::new(port);
        let input = array(vec![a.clone().into(), b.clone().into()]);
        let out = seq.convert(&input, &ConversionOptions::default()).unwrap();
        assert!(out[0].as_object().unwrap().ptr_eq(&a));
        assert!(out[1].as_object().unwrap().ptr_eq(&b));
    }
}
