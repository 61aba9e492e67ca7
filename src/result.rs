/// Success or failure payload that flattens into a single JSON object.
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    pub fn err(error: E) -> Self {
        Outcome::Err(error)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(v) => Outcome::Ok(v),
            Err(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for serde_json::Value
where
    T: serde::Serialize,
    E: serde::Serialize,
{
    fn from(res: Outcome<T, E>) -> Self {
        match res {
            Outcome::Ok(v) => serde_json::json!(v),
            Outcome::Err(e) => serde_json::json!(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;
    use serde_json::{Value, json};

    #[test]
    fn test_ok_and_err_flatten_to_payload() {
        let ok: Outcome<&str, u8> = Outcome::ok("fine");
        assert!(ok.is_ok());
        assert_eq!(Value::from(ok), json!("fine"));

        let err: Outcome<&str, u8> = Outcome::err(7);
        assert!(!err.is_ok());
        assert_eq!(Value::from(err), json!(7));
    }

    #[test]
    fn test_from_result() {
        let res: Result<u8, String> = Err("boom".into());
        let outcome = Outcome::from(res);
        assert_eq!(Value::from(outcome), json!("boom"));
    }
}
