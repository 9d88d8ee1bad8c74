use quickcheck::QuickCheck;

mod property_radix;

/// A runner sized for the environment: more cases on CI, few under miri.
fn runner() -> QuickCheck {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new().tests(tests)
}
