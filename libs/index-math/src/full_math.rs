use soroban_sdk::{Env, U256};

/// floor(a * b / denominator) through a 256-bit product
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    u128_from_u256(&product.div(&U256::from_u128(env, denominator)))
}

/// Narrow a 256-bit quotient back to u128
fn u128_from_u256(value: &U256) -> u128 {
    match value.to_u128() {
        Some(narrow) => narrow,
        None => panic!("U256 overflow when converting to u128"),
    }
}

/// Checked addition that panics on overflow with a readable message
pub fn add_or_panic(a: u128, b: u128) -> u128 {
    match a.checked_add(b) {
        Some(sum) => sum,
        None => panic!("u128 addition overflow"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_mul_div_basic() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 10, 20, 5), 40);
    }

    #[test]
    fn test_mul_div_phantom_overflow() {
        let env = Env::default();
        // score * notional overflows u128 while the quotient fits
        let score = 1u128 << 100;
        let notional = 1u128 << 100;
        assert_eq!(mul_div(&env, score, notional, 1u128 << 100), 1u128 << 100);
    }

    #[test]
    fn test_mul_div_max_values() {
        let env = Env::default();
        let max = u128::MAX;
        assert_eq!(mul_div(&env, max, max, max), max);
    }

    #[test]
    fn test_mul_div_rounds_down() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 1, 1, 2), 0);
        assert_eq!(mul_div(&env, 3, 1, 2), 1);
        assert_eq!(mul_div(&env, 10, 1, 3), 3);
    }

    #[test]
    fn test_mul_div_zero_numerator() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 0, 100, 50), 0);
        assert_eq!(mul_div(&env, 100, 0, 50), 0);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_mul_div_zero_denominator() {
        let env = Env::default();
        mul_div(&env, 10, 20, 0);
    }

    #[test]
    #[should_panic(expected = "U256 overflow when converting to u128")]
    fn test_mul_div_result_overflow() {
        let env = Env::default();
        mul_div(&env, u128::MAX, 2, 1);
    }

    #[test]
    #[should_panic(expected = "u128 addition overflow")]
    fn test_add_or_panic_overflow() {
        add_or_panic(u128::MAX, 1);
    }
}
