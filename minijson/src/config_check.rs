// SPDX-License-Identifier: Apache-2.0

//! Compile-time configuration validation
//!
//! This module contains compile-time checks to ensure that mutually exclusive
//! features are not enabled simultaneously.

// If none were selected that's an error
#[cfg(not(any(feature = "exponent-lenient", feature = "exponent-strict")))]
compile_error!(
    "No exponent grammar feature selected: choose one of 'exponent-lenient' or 'exponent-strict'"
);

#[cfg(all(feature = "exponent-lenient", feature = "exponent-strict"))]
compile_error!(
    "Cannot enable both 'exponent-lenient' and 'exponent-strict' features simultaneously: choose one exponent grammar"
);
