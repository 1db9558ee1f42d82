use crate::core::cipher;
use crate::core::{ConfigProvider, DecodedMessage, Message, Pipeline, Sink};
use crate::utils::error::Result;

pub struct ConsolePipeline<S: Sink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: Sink, C: ConfigProvider> ConsolePipeline<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }
}

impl<S: Sink, C: ConfigProvider> Pipeline for ConsolePipeline<S, C> {
    fn source(&self) -> Result<Message> {
        let message = Message::new(self.config.message());
        tracing::debug!("Sourced message: {:?}", message.text);
        Ok(message)
    }

    fn transform(&self, message: Message) -> Result<DecodedMessage> {
        let shift = self.config.shift();

        // 解碼方向:套用負向旋轉
        let decoded = cipher::transform(&message.text, -shift.value());

        Ok(DecodedMessage {
            original: message,
            decoded,
            shift,
        })
    }

    fn emit(&self, decoded: DecodedMessage) -> Result<String> {
        let report = format!(
            "Encrypted message:\n{}\n\nDecrypted message (shift {}):\n{}\n",
            decoded.original.text,
            -decoded.shift.value(),
            decoded.decoded,
        );

        self.sink.write_report(&report)?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Shift;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct BufferSink {
        reports: Arc<Mutex<Vec<String>>>,
    }

    impl BufferSink {
        fn new() -> Self {
            Self {
                reports: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn last_report(&self) -> Option<String> {
            self.reports.lock().unwrap().last().cloned()
        }
    }

    impl Sink for BufferSink {
        fn write_report(&self, report: &str) -> Result<()> {
            self.reports.lock().unwrap().push(report.to_string());
            Ok(())
        }
    }

    struct MockConfig {
        message: String,
        shift: Shift,
    }

    impl MockConfig {
        fn new(message: &str, shift: i32) -> Self {
            Self {
                message: message.to_string(),
                shift: Shift::new(shift),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn message(&self) -> &str {
            &self.message
        }

        fn shift(&self) -> Shift {
            self.shift
        }
    }

    #[test]
    fn test_transform_decodes_sample_message() {
        let pipeline = ConsolePipeline::new(
            BufferSink::new(),
            MockConfig::new("DQQ LV WKH JXDUGLDQ RI WKH FRGHV.", 3),
        );

        let message = pipeline.source().unwrap();
        let decoded = pipeline.transform(message).unwrap();

        assert_eq!(decoded.decoded, "ANN IS THE GUARDIAN OF THE CODES.");
        assert_eq!(decoded.original.text, "DQQ LV WKH JXDUGLDQ RI WKH FRGHV.");
        assert_eq!(decoded.shift, Shift::new(3));
    }

    #[test]
    fn test_emit_renders_exact_report_format() {
        let sink = BufferSink::new();
        let pipeline = ConsolePipeline::new(
            sink.clone(),
            MockConfig::new("DQQ LV WKH JXDUGLDQ RI WKH FRGHV.", 3),
        );

        let message = pipeline.source().unwrap();
        let decoded = pipeline.transform(message).unwrap();
        let report = pipeline.emit(decoded).unwrap();

        assert_eq!(
            report,
            "Encrypted message:\n\
             DQQ LV WKH JXDUGLDQ RI WKH FRGHV.\n\
             \n\
             Decrypted message (shift -3):\n\
             ANN IS THE GUARDIAN OF THE CODES.\n"
        );
        assert_eq!(sink.last_report().unwrap(), report);
    }

    #[test]
    fn test_negative_shift_interpolates_positive_header() {
        let pipeline =
            ConsolePipeline::new(BufferSink::new(), MockConfig::new("Ebiil", -3));

        let message = pipeline.source().unwrap();
        let decoded = pipeline.transform(message).unwrap();
        let report = pipeline.emit(decoded).unwrap();

        assert_eq!(
            report,
            "Encrypted message:\nEbiil\n\nDecrypted message (shift 3):\nHello\n"
        );
    }

    #[test]
    fn test_empty_message_produces_empty_lines() {
        let pipeline = ConsolePipeline::new(BufferSink::new(), MockConfig::new("", 5));

        let message = pipeline.source().unwrap();
        let decoded = pipeline.transform(message).unwrap();
        assert_eq!(decoded.decoded, "");

        let report = pipeline.emit(decoded).unwrap();
        assert_eq!(
            report,
            "Encrypted message:\n\n\nDecrypted message (shift -5):\n\n"
        );
    }

    #[test]
    fn test_punctuation_and_case_survive_decoding() {
        let pipeline =
            ConsolePipeline::new(BufferSink::new(), MockConfig::new("Khoor, Zruog!", 3));

        let message = pipeline.source().unwrap();
        let decoded = pipeline.transform(message).unwrap();

        assert_eq!(decoded.decoded, "Hello, World!");
    }

    #[test]
    fn test_lowercase_message_decodes() {
        let pipeline = ConsolePipeline::new(BufferSink::new(), MockConfig::new("dqq", 3));

        let message = pipeline.source().unwrap();
        let decoded = pipeline.transform(message).unwrap();

        assert_eq!(decoded.decoded, "ann");
    }
}
