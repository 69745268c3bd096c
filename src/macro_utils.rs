/// This assertion is always enabled but only verbose (formatting when
/// debug assertions are enabled).
#[cfg(debug_assertions)]
macro_rules! ndassert {
    ($e:expr, $($t:tt)*) => { assert!($e, $($t)*) }
}

#[cfg(not(debug_assertions))]
macro_rules! ndassert {
    ($e:expr, $($_ignore:tt)*) => { assert!($e) }
}

/// Run `$body` with `$a` bound to the typed array inside a `Value`, once
/// per element kind. Non-array values evaluate `$fallback` with the value
/// bound to `$other`.
///
/// In the second form `$wrap` is also bound, to the `Value` variant
/// constructor of the arm, so the body can rewrap a typed result.
///
/// `match_array!(value, a => a.len(), other => Err(..))`<br>
/// `match_array!(value, a, wrap => a.view().map(wrap), other => Err(..))`
macro_rules! match_array {
    ($value:expr, $a:ident => $body:expr, $other:ident => $fallback:expr) => {
        match $value {
            $crate::Value::Bool($a) => $body,
            $crate::Value::Int($a) => $body,
            $crate::Value::Float($a) => $body,
            $other => $fallback,
        }
    };
    ($value:expr, $a:ident, $wrap:ident => $body:expr, $other:ident => $fallback:expr) => {
        match $value {
            $crate::Value::Bool($a) => {
                let $wrap = $crate::Value::Bool;
                $body
            }
            $crate::Value::Int($a) => {
                let $wrap = $crate::Value::Int;
                $body
            }
            $crate::Value::Float($a) => {
                let $wrap = $crate::Value::Float;
                $body
            }
            $other => $fallback,
        }
    };
}
