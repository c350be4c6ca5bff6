use serde::{Deserialize, Serialize};

/// A single payment order as it arrives from the outside world.
///
/// Field names follow the JSON-body spelling (`paymentType`), which is also
/// the CSV column header. `amount` is carried as an opaque string: this crate
/// never parses or validates it numerically.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Amount to transfer, passed through verbatim.
    pub amount: String,
    /// Provider key selecting the strategy (case-sensitive, e.g. "paypal").
    pub payment_type: String,
    pub sender: String,
    pub receiver: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization_from_json_body() {
        let body = r#"{"amount":"100","paymentType":"paypal","sender":"A","receiver":"B"}"#;
        let request: PaymentRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.amount, "100");
        assert_eq!(request.payment_type, "paypal");
        assert_eq!(request.sender, "A");
        assert_eq!(request.receiver, "B");
    }

    #[test]
    fn test_request_deserialization_from_csv_record() {
        let csv = "amount, paymentType, sender, receiver\n250, razorpay, X, Y";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let request: PaymentRequest = iter.next().unwrap().expect("Failed to deserialize request");

        assert_eq!(request.payment_type, "razorpay");
        assert_eq!(request.amount, "250");
    }

    #[test]
    fn test_amount_is_not_parsed() {
        let body = r#"{"amount":"not-a-number","paymentType":"paypal","sender":"A","receiver":"B"}"#;
        let request: PaymentRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.amount, "not-a-number");
    }
}
