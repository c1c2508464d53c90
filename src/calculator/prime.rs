//! @acp:module "Primality"
//! @acp:summary "Trial-division primality check for computed sums"
//! @acp:domain calculator
//! @acp:layer service

/// @acp:summary "Check whether a value is prime"
///
/// Values below 2 (zero, one, negatives) are never prime. Odd values are
/// trial-divided by odd candidates up to the integer square root.
pub fn is_prime(value: i64) -> bool {
    if value < 2 {
        return false;
    }
    if value == 2 {
        return true;
    }
    if value % 2 == 0 {
        return false;
    }

    let mut divisor = 3i64;
    // divisor <= value / divisor avoids squaring past i64::MAX
    while divisor <= value / divisor {
        if value % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}
