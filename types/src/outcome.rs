use serde::{Deserialize, Serialize};

/// How a single input settled: fulfilled with a value or rejected with an
/// error.
///
/// Unlike [`Result`], an `Outcome` is not a control-flow type — it is a data
/// record. Settlement combinators produce one per input so that no rejection
/// short-circuits the rest of the batch. The serde representation keeps the
/// channel tag lowercase, so a settled batch reads as
/// `[{"ok": 1}, {"err": "boom"}]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome<T, E> {
    /// The input fulfilled.
    Ok(T),
    /// The input rejected.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[must_use]
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// The fulfillment value, if this input fulfilled.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// The rejection reason, if this input rejected.
    #[must_use]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Reinterpret the record as a `Result`, restoring short-circuit
    /// behavior at the call site.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;

    #[test]
    fn accessors_match_channel() {
        let ok: Outcome<u32, &str> = Outcome::Ok(7);
        assert!(ok.is_ok());
        assert!(!ok.is_err());
        assert_eq!(ok.ok(), Some(7));

        let err: Outcome<u32, &str> = Outcome::Err("boom");
        assert!(err.is_err());
        assert_eq!(err.err(), Some("boom"));
        assert_eq!(err.ok(), None);
    }

    #[test]
    fn round_trips_through_result() {
        let outcome = Outcome::from(Result::<u32, &str>::Ok(3));
        assert_eq!(outcome, Outcome::Ok(3));
        assert_eq!(outcome.into_result(), Ok(3));

        let outcome = Outcome::from(Result::<u32, &str>::Err("no"));
        assert_eq!(Result::from(outcome), Err("no"));
    }

    #[test]
    fn serde_uses_lowercase_channel_tags() {
        let ok: Outcome<u32, String> = Outcome::Ok(1);
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"ok":1}"#);

        let err: Outcome<u32, String> = Outcome::Err("boom".into());
        assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"err":"boom"}"#);

        let parsed: Outcome<u32, String> = serde_json::from_str(r#"{"err":"boom"}"#).unwrap();
        assert_eq!(parsed, err);
    }
}
