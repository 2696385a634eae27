use crate::constant::*;
use crate::raw::{RawArgs, RawValue};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

impl RawArgs {
    /// Tokenize command line tokens (without the program name) into raw arguments.
    ///
    /// * `--name value`, `--name=value`, `-n value` and `-n=value` give the flag a value.
    /// * A flag followed by another flag (or nothing) is a boolean marker: `--name` is `true`, `--no-name` is `false`.
    /// * A value of exactly `true` or `false` after a flag is a boolean: `--name false` is `false`.
    /// * Short flags may be clustered: `-abc` marks `a`, `b` and `c`.
    ///   A numeric remainder is the value of the flag before it: `-n5` gives `n` the value `5`.
    /// * Repeating a flag accumulates its values in order.
    /// * Values that look like numbers become numbers.
    /// * `-h` and `--help` always request help; they never take a value.
    /// * Everything after `--` is positional.
    ///
    /// ### Example
    /// ```
    /// # use cmdtree_core as cmdtree;
    /// use cmdtree::{RawArgs, RawValue};
    ///
    /// let raw = RawArgs::from_tokens(&["first", "--ids", "1", "--ids=b", "-v", "second"]);
    ///
    /// assert_eq!(raw.tokens(), &["first".to_string()]);
    /// assert_eq!(raw.get("ids"), Some(&RawValue::List(vec![RawValue::Int(1), RawValue::from("b")])));
    /// assert_eq!(raw.get("v"), Some(&RawValue::from("second")));
    /// ```
    pub fn from_tokens(tokens: &[&str]) -> Self {
        let mut tokenizer = Tokenizer::default();

        for token in tokens {
            tokenizer.feed(token);
        }

        tokenizer.close()
    }
}

#[derive(Default)]
struct Tokenizer {
    args: RawArgs,
    // A flag waiting on its value.
    pending: Option<String>,
    terminated: bool,
}

impl Tokenizer {
    fn feed(&mut self, token: &str) {
        if self.terminated {
            self.args.push_positional(token);
            return;
        }

        if token == TERMINATOR {
            self.close_pending();
            self.terminated = true;
            return;
        }

        // Find a 'long' flag, such as:
        //  --initial
        //  --initial ..
        //  --initial=..
        //  --no-initial
        if let Some(body) = token.strip_prefix(LONG_PREFIX) {
            self.close_pending();
            self.match_long(body);
            return;
        }

        // Find 'short' flag(s), such as:
        //  -i
        //  -i ..
        //  -i=..
        //  -iv
        // A lone '-' and negative numbers are values.
        if let Some(body) = token.strip_prefix('-') {
            if !body.is_empty() && !looks_numeric(token) {
                self.close_pending();
                self.match_short(body);
                return;
            }
        }

        self.match_value(token);
    }

    fn match_value(&mut self, token: &str) {
        match self.pending.take() {
            Some(name) => match token {
                "true" => self.args.append(name, RawValue::Bool(true)),
                "false" => self.args.append(name, RawValue::Bool(false)),
                _ => self.args.append(name, scalar(token)),
            },
            None => self.args.push_positional(token),
        }
    }

    fn match_long(&mut self, body: &str) {
        match body.split_once('=') {
            Some((name, value)) => {
                if name == HELP_NAME {
                    self.args.append(HELP_NAME, RawValue::Bool(true));
                } else {
                    self.args.append(name, scalar(value));
                }
            }
            None => {
                if body == HELP_NAME {
                    self.args.append(HELP_NAME, RawValue::Bool(true));
                } else if let Some(name) = body.strip_prefix(NEGATION_PREFIX) {
                    self.args.append(name, RawValue::Bool(false));
                } else {
                    self.pending.replace(body.to_string());
                }
            }
        }
    }

    fn match_short(&mut self, body: &str) {
        let (cluster, value) = match body.split_once('=') {
            Some((cluster, value)) => (cluster, Some(value)),
            None => (body, None),
        };
        let mut shorts = cluster.char_indices().peekable();

        while let Some((i, short)) = shorts.next() {
            if short == HELP_SHORT {
                self.args.append(HELP_NAME, RawValue::Bool(true));
                continue;
            }

            let name = short.to_string();
            let rest = &cluster[i + short.len_utf8()..];

            // A numeric remainder is the value of this flag: -n5
            if looks_numeric(rest) {
                self.args.append(name, scalar(rest));
                return;
            }

            // Only the final short flag in a cluster may take a value.
            if shorts.peek().is_some() {
                self.args.append(name, RawValue::Bool(true));
            } else {
                match value {
                    Some(v) => self.args.append(name, scalar(v)),
                    None => {
                        self.pending.replace(name);
                    }
                }
            }
        }
    }

    fn close_pending(&mut self) {
        if let Some(name) = self.pending.take() {
            self.args.append(name, RawValue::Bool(true));
        }
    }

    fn close(mut self) -> RawArgs {
        self.close_pending();

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Tokenized: {:?}.", self.args);
        }

        self.args
    }
}

fn scalar(token: &str) -> RawValue {
    if looks_numeric(token) {
        if let Ok(value) = token.parse::<i64>() {
            return RawValue::Int(value);
        }

        if let Ok(value) = token.parse::<f64>() {
            return RawValue::Float(value);
        }
    }

    RawValue::Str(token.to_string())
}

// Plain decimal notation only: an optional sign, digits with at most one '.', and an optional exponent.
// Words such as "inf" or "NaN" stay strings.
fn looks_numeric(token: &str) -> bool {
    let unsigned = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let mut digits = 0;
    let mut dots = 0;

    for c in mantissa.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }

    if digits == 0 || dots > 1 {
        return false;
    }

    match exponent {
        None => true,
        Some(exponent) => {
            let exponent = exponent
                .strip_prefix('-')
                .or_else(|| exponent.strip_prefix('+'))
                .unwrap_or(exponent);
            !exponent.is_empty() && exponent.chars().all(|c| c.is_ascii_digit())
        }
    }
}
