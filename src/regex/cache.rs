/// Compile a pattern on first use at the call site and hand back the same
/// `Regex` on every later call. A pattern that fails to compile panics.
#[macro_export]
macro_rules! regex {
    ($pattern:literal) => {{
        static CACHED: ::std::sync::OnceLock<::regex::Regex> = ::std::sync::OnceLock::new();
        CACHED.get_or_init(|| match ::regex::Regex::new($pattern) {
            Ok(compiled) => compiled,
            Err(error) => panic!("invalid pattern {}: {}", $pattern, error),
        })
    }};
}
