use goalify_client::GoalifyError;
use litesvm::types::TransactionResult;
use utils::anchor_error_number;

pub struct Helpers;

impl Helpers {
    pub fn assert_goalify_error(result: &TransactionResult, expected: GoalifyError) {
        assert!(result.is_err(), "expected {:?}, transaction succeeded", expected);

        let number = anchor_error_number(result)
            .unwrap_or_else(|| panic!("no Anchor error in logs: {:#?}", result));

        assert_eq!(
            GoalifyError::from_code(number),
            Some(expected),
            "expected {:?} ({}), got error number {}",
            expected,
            expected.code(),
            number
        );
    }

    pub fn return_u64(result: &TransactionResult) -> u64 {
        let meta = result.as_ref().expect("transaction failed");
        let data = &meta.return_data.data;
        assert!(data.len() <= 8, "return data is not a u64: {:?}", data);

        // trailing zero bytes may be trimmed from return data
        let mut bytes = [0u8; 8];
        bytes[..data.len()].copy_from_slice(data);
        u64::from_le_bytes(bytes)
    }
}
