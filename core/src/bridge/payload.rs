use crate::bridge::record::BenchmarkRecord;
use crate::prelude::{BenchResult, Delivery};

/// Decodes a raw bridge answer.
///
/// A missing answer, a blank string or a JSON `null` all mean the host has
/// nothing more to hand out. Anything else must be a JSON array of records.
pub fn decode_payload(raw: Option<&str>) -> BenchResult<Delivery> {
    let text = match raw.map(str::trim) {
        None | Some("") => return Ok(Delivery::EndOfStream),
        Some(text) => text,
    };

    let batch: Option<Vec<BenchmarkRecord>> = serde_json::from_str(text)?;
    Ok(match batch {
        Some(records) => Delivery::Batch(records),
        None => Delivery::EndOfStream,
    })
}

/// Encodes a batch the way the bridge returns it; `None` becomes `null`.
pub fn encode_batch(batch: Option<&[BenchmarkRecord]>) -> BenchResult<String> {
    Ok(serde_json::to_string(&batch)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::BenchError;

    #[test]
    fn sentinels_end_the_stream() {
        assert_eq!(decode_payload(None).unwrap(), Delivery::EndOfStream);
        assert_eq!(decode_payload(Some("  ")).unwrap(), Delivery::EndOfStream);
        assert_eq!(decode_payload(Some("null")).unwrap(), Delivery::EndOfStream);
    }

    #[test]
    fn array_decodes_in_order() {
        let raw = r#"[{"name":"a","time_c":1,"time_neon":1},{"name":"b","time_c":2,"time_neon":1}]"#;
        match decode_payload(Some(raw)).unwrap() {
            Delivery::Batch(records) => {
                assert_eq!(records.len(), 2);
                assert_eq!(records[1].name, "b");
            }
            other => panic!("unexpected delivery {:?}", other),
        }
    }

    #[test]
    fn empty_array_is_a_batch_not_the_end() {
        assert_eq!(
            decode_payload(Some("[]")).unwrap(),
            Delivery::Batch(Vec::new())
        );
    }

    #[test]
    fn malformed_payload_is_reported() {
        let err = decode_payload(Some("[{\"name\":")).unwrap_err();
        assert!(matches!(err, BenchError::MalformedPayload(_)));
    }

    #[test]
    fn encoded_end_of_stream_is_null() {
        assert_eq!(encode_batch(None).unwrap(), "null");
        let records = vec![BenchmarkRecord::new("abs_float", 3.0, 1.0)];
        let text = encode_batch(Some(records.as_slice())).unwrap();
        assert_eq!(
            decode_payload(Some(&text)).unwrap(),
            Delivery::Batch(records)
        );
    }
}
