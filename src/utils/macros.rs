/// Unwraps an `Ok`, or evaluates `$block` with the error bound to `$err`.
/// The block usually diverges (`continue`, `return`).
#[macro_export]
macro_rules! ok_or {
    ($result: expr, $err: pat => $block: expr) => {
        match $result {
            Ok(val) => val,
            Err($err) => $block,
        }
    };
}
