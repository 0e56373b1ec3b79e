use crate::core::luhn;
use crate::domain::model::{Alphabet, Imei, Prefix, BODY_LEN};
use crate::domain::ports::DigitSource;
use crate::utils::error::Result;

pub struct ImeiGenerator<D: DigitSource> {
    digits: D,
    alphabet: Alphabet,
}

impl<D: DigitSource> ImeiGenerator<D> {
    pub fn new(digits: D) -> Self {
        Self {
            digits,
            alphabet: Alphabet::decimal(),
        }
    }

    /// Pads `prefix` with random digits up to 14 and appends the check digit.
    pub fn generate(&mut self, prefix: &Prefix) -> Result<Imei> {
        let mut body = String::with_capacity(BODY_LEN + 1);
        body.push_str(prefix.as_str());

        while body.len() < BODY_LEN {
            let radix = self.alphabet.len();
            let value = self.digits.next_digit(radix) % radix;
            body.push(self.alphabet.symbol(value));
        }

        let check_digit = luhn::calc_check_digit(&body, &self.alphabet)?;
        Ok(Imei::from_body(body, check_digit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::IMEI_LEN;
    use crate::domain::ports::RandomDigits;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct FixedDigits(Vec<usize>, usize);

    impl DigitSource for FixedDigits {
        fn next_digit(&mut self, _radix: usize) -> usize {
            let digit = self.0[self.1 % self.0.len()];
            self.1 += 1;
            digit
        }
    }

    #[test]
    fn test_generate_with_zero_padding() {
        let mut generator = ImeiGenerator::new(FixedDigits(vec![0], 0));
        let prefix = Prefix::parse("12345678").unwrap();

        let imei = generator.generate(&prefix).unwrap();
        assert_eq!(imei.as_str(), "123456780000002");
    }

    #[test]
    fn test_padding_consumes_digits_in_order() {
        let mut generator = ImeiGenerator::new(FixedDigits(vec![3, 2, 3, 7, 5, 1], 0));
        let prefix = Prefix::parse("49015420").unwrap();

        let imei = generator.generate(&prefix).unwrap();
        assert_eq!(imei.as_str(), "490154203237518");
        assert_eq!(imei.serial(), "323751");
    }

    #[test]
    fn test_twelve_digit_prefix_needs_two_padding_digits() {
        let mut generator = ImeiGenerator::new(FixedDigits(vec![9], 0));
        let prefix = Prefix::parse("123456789012").unwrap();

        let imei = generator.generate(&prefix).unwrap();
        assert!(imei.as_str().starts_with("12345678901299"));
        assert_eq!(generator.digits.1, 2);
    }

    #[test]
    fn test_generated_records_keep_prefix_and_validate() {
        let mut generator = ImeiGenerator::new(RandomDigits::new(StdRng::seed_from_u64(1)));
        let alphabet = Alphabet::decimal();

        for prefix in ["35693803", "356938035", "3569380356", "35693803564", "356938035643"] {
            let prefix = Prefix::parse(prefix).unwrap();
            for _ in 0..25 {
                let imei = generator.generate(&prefix).unwrap();
                assert_eq!(imei.as_str().len(), IMEI_LEN);
                assert!(imei.as_str().starts_with(prefix.as_str()));
                assert!(luhn::is_valid(imei.as_str(), &alphabet));
            }
        }
    }

    #[test]
    fn test_out_of_range_digits_are_reduced() {
        let mut generator = ImeiGenerator::new(FixedDigits(vec![13, 10, usize::MAX], 0));
        let prefix = Prefix::parse("86012345").unwrap();

        let imei = generator.generate(&prefix).unwrap();
        assert!(imei.as_str().starts_with("86012345305305"));
        assert!(luhn::is_valid(imei.as_str(), &Alphabet::decimal()));
    }
}
