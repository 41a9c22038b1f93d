//! Positional `%`-specifier message formatting.

use serde_json::Value;

/// How to serialize the value consumed by a specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Specifier {
    /// `%s` - natural string rendering.
    Str,
    /// `%d` / `%i` - numeric coercion.
    Num,
    /// `%j` - compact JSON.
    Json,
    /// `%o` - strings pass through, everything else as JSON.
    Object,
}

impl Specifier {
    fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::Str),
            'd' | 'i' => Some(Self::Num),
            'j' => Some(Self::Json),
            'o' => Some(Self::Object),
            _ => None,
        }
    }

    fn render(self, value: &Value) -> String {
        match self {
            Self::Str => display_value(value),
            Self::Num => format_number(coerce_number(value)),
            Self::Json => json_text(value),
            Self::Object => object_text(value),
        }
    }
}

/// Renders `message`, substituting `%s`, `%d`, `%i`, `%j`, and `%o`
/// specifiers with the positional `args` in order.
///
/// `%%` escapes a literal percent sign and consumes no value. A
/// specifier without a matching argument stays in the output as-is;
/// arguments without a matching specifier are appended to the end,
/// space-separated. A `%` not introducing a specifier is literal text.
///
/// # Example
///
/// ```
/// use bric_core::format_str;
/// use serde_json::json;
///
/// assert_eq!(format_str("Hello %s", &[json!("world")]), "Hello world");
/// assert_eq!(format_str("Escaped %%s", &[json!("value")]), "Escaped %s value");
/// ```
pub fn format_str(message: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(message.len());
    let mut chars = message.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(spec_char) => match Specifier::from_char(spec_char) {
                Some(spec) if next_arg < args.len() => {
                    chars.next();
                    out.push_str(&spec.render(&args[next_arg]));
                    next_arg += 1;
                }
                _ => out.push('%'),
            },
            None => out.push('%'),
        }
    }

    for arg in &args[next_arg..] {
        out.push(' ');
        out.push_str(&display_value(arg));
    }
    out
}

/// Natural string rendering: strings pass through unquoted, scalars
/// print bare, arrays as compact JSON, objects as the opaque
/// `[object Object]` marker.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) => json_text(value),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn json_text(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

fn object_text(value: &Value) -> String {
    if let Value::String(s) = value {
        return s.clone();
    }
    let json = json_text(value);
    // A value with no enumerable data falls back to the natural form.
    if json == "{}" || json == "[]" {
        display_value(value)
    } else {
        json
    }
}

fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(true) => 1.0,
        Value::Bool(false) => 0.0,
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else {
        n.to_string()
    }
}
