use std::borrow::Cow;

/// Human-readable name of a value's variant.
///
/// Used in log fields and by hosts classifying [`ErrorReport`](crate::ErrorReport)s.
/// Derive it with `#[derive(Label)]`.
pub trait Label {
    /// Returns a human-readable label for this item.
    fn label(&self) -> Cow<'static, str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(flowblock::Label)]
    #[allow(dead_code)]
    enum Signal {
        Start,
        Data(u32, String),
        Stop { reason: String },
    }

    #[derive(flowblock::Label)]
    struct Probe;

    #[test]
    fn test_derived_label_variants() {
        assert_eq!(Signal::Start.label(), "Start");
        assert_eq!(Signal::Data(1, "x".into()).label(), "Data");
        assert_eq!(
            Signal::Stop {
                reason: "done".into()
            }
            .label(),
            "Stop"
        );
    }

    #[test]
    fn test_derived_label_struct() {
        assert_eq!(Probe.label(), "Probe");
    }
}
