// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! push_fmt {
    // Append formatted text to a String buffer.
    // Writing into a String cannot fail, so the fmt::Result is dropped here once.
    ($buf:expr, $($arg:tt)*) => {{
        use ::std::fmt::Write as _;
        let _ = ::std::write!($buf, $($arg)*);
    }};
}
