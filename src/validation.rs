use num_traits::Float;
use crate::brute_force::MAX_BRUTE_FORCE_OPTIONALS;
use crate::dreyfus_wagner::MAX_TERMINALS;
use crate::{Algorithm, Point, SpannerConfig, SpannerError};

pub(crate) struct InputValidator<'a, T> {
    terminals: &'a [Point<T>],
    optionals: &'a [Point<T>],
    config: &'a SpannerConfig,
}

impl<'a, T: Float> InputValidator<'a, T> {
    pub(crate) fn new(
        terminals: &'a [Point<T>],
        optionals: &'a [Point<T>],
        config: &'a SpannerConfig,
    ) -> Self {
        Self { terminals, optionals, config }
    }

    pub(crate) fn validate_input_data(&self) -> Result<(), SpannerError> {
        Self::validate_finite(self.terminals, "terminal")?;
        Self::validate_finite(self.optionals, "optional vertex")?;
        match self.config.algorithm {
            Algorithm::MinimumSpanningTree => Ok(()),
            Algorithm::DreyfusWagner => self.validate_terminal_count(),
            Algorithm::BruteForceMst => self.validate_optional_count(),
        }
    }

    fn validate_finite(points: &[Point<T>], kind: &str) -> Result<(), SpannerError> {
        match points.iter().position(|point| !point.is_finite()) {
            Some(n) => Err(SpannerError::NonFiniteCoordinate(format!(
                "{n}th {kind} has non-finite coordinate(s)"
            ))),
            None => Ok(()),
        }
    }

    fn validate_terminal_count(&self) -> Result<(), SpannerError> {
        let n_terminals = self.terminals.len();
        if n_terminals > MAX_TERMINALS {
            return Err(SpannerError::TooManyTerminals(format!(
                "Dreyfus-Wagner supports at most {MAX_TERMINALS} terminals, got {n_terminals}"
            )));
        }
        Ok(())
    }

    fn validate_optional_count(&self) -> Result<(), SpannerError> {
        let n_optionals = self.optionals.len();
        if n_optionals > MAX_BRUTE_FORCE_OPTIONALS {
            return Err(SpannerError::TooManyOptionals(format!(
                "brute force supports at most {MAX_BRUTE_FORCE_OPTIONALS} optional vertices, \
                got {n_optionals}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(algorithm: Algorithm) -> SpannerConfig {
        SpannerConfig::builder().algorithm(algorithm).build()
    }

    #[test]
    fn degenerate_input_is_valid() {
        let config = config(Algorithm::DreyfusWagner);
        let validator = InputValidator::<f64>::new(&[], &[], &config);
        assert_eq!(Ok(()), validator.validate_input_data());
    }

    #[test]
    fn non_finite_coordinate() {
        let config = config(Algorithm::MinimumSpanningTree);
        let terminals = vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        let result = InputValidator::new(&terminals, &[], &config).validate_input_data();
        assert!(matches!(result, Err(SpannerError::NonFiniteCoordinate(..))));

        let optionals = vec![Point::new(f64::INFINITY, 0.0)];
        let result = InputValidator::new(&terminals[..1], &optionals, &config).validate_input_data();
        assert!(matches!(result, Err(SpannerError::NonFiniteCoordinate(..))));
    }

    #[test]
    fn terminal_ceiling_only_binds_dreyfus_wagner() {
        let terminals = (0..=MAX_TERMINALS).map(|i| Point::new(i as f64, 0.0)).collect::<Vec<_>>();

        let dfw = config(Algorithm::DreyfusWagner);
        let result = InputValidator::new(&terminals, &[], &dfw).validate_input_data();
        assert!(matches!(result, Err(SpannerError::TooManyTerminals(..))));

        let mst = config(Algorithm::MinimumSpanningTree);
        assert_eq!(Ok(()), InputValidator::new(&terminals, &[], &mst).validate_input_data());
    }

    #[test]
    fn optional_ceiling_only_binds_brute_force() {
        let optionals = (0..=MAX_BRUTE_FORCE_OPTIONALS)
            .map(|i| Point::new(0.0, i as f64))
            .collect::<Vec<_>>();

        let bfmst = config(Algorithm::BruteForceMst);
        let result = InputValidator::new(&[], &optionals, &bfmst).validate_input_data();
        assert!(matches!(result, Err(SpannerError::TooManyOptionals(..))));

        let dfw = config(Algorithm::DreyfusWagner);
        assert_eq!(Ok(()), InputValidator::new(&[], &optionals, &dfw).validate_input_data());
    }
}
