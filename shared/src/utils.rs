// Numeric helpers for loosely typed backend payloads.
// Values arrive as numbers, numeric strings, or garbage; everything funnels through here.

pub mod number_format {
    use serde_json::Value;
    use std::str::FromStr;

    // Loose numeric coercion: numbers pass through, strings are trimmed and parsed,
    // booleans map to 1/0, null and blank strings to 0. Anything else is NaN.
    pub fn to_number(value: &Value) -> f64 {
        match value {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => parse_str(s),
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Null => 0.0,
            Value::Array(_) | Value::Object(_) => f64::NAN,
        }
    }

    fn parse_str(s: &str) -> f64 {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return 0.0;
        }
        let radix = match trimmed.get(..2) {
            Some("0x") | Some("0X") => Some(16),
            Some("0o") | Some("0O") => Some(8),
            Some("0b") | Some("0B") => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return u64::from_str_radix(&trimmed[2..], radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
        f64::from_str(trimmed).unwrap_or(f64::NAN)
    }

    /// Coerces an optional raw value into a usable commission amount:
    /// finite and never negative.
    pub fn to_amount(value: Option<&Value>) -> f64 {
        let n = value.map(to_number).unwrap_or(f64::NAN);
        sanitize_amount(n)
    }

    pub fn sanitize_amount(n: f64) -> f64 {
        if !n.is_finite() || n < 0.0 {
            0.0
        } else {
            n
        }
    }

    // Whole amounts are emitted as JSON integers so `20` stays `20` instead of `20.0`.
    pub fn amount_to_value(n: f64) -> Value {
        let n = sanitize_amount(n);
        if n.fract() == 0.0 && n < u64::MAX as f64 {
            Value::from(n as u64)
        } else {
            Value::from(n)
        }
    }

}
