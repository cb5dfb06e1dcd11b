/// Compile a regex literal once and return a `&'static Regex`.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a static table of `WeightedPattern`s sharing one weight.
///
/// ```ignore
/// static SUBTRACT: &[WeightedPattern] = patterns!(-1 => ["cial", "tia"]);
/// ```
macro_rules! patterns {
    ($weight:literal => [ $($pat:literal),* $(,)? ]) => {
        &[ $( $crate::syllables::WeightedPattern { source: $pat, weight: $weight } ),* ]
    };
}
