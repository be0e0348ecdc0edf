//! Property-based tests for leveled_logger using proptest

use leveled_logger::core::target::TargetConfig;
use leveled_logger::core::template;
use leveled_logger::prelude::*;
use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = SeverityLevel> {
    prop::sample::select(SeverityLevel::ALL.to_vec())
}

struct Counting {
    config: TargetConfig,
    calls: Arc<Mutex<Vec<(SeverityLevel, String)>>>,
}

impl Target for Counting {
    fn log(&mut self, severity: SeverityLevel, message: &str) -> Result<()> {
        self.calls.lock().push((severity, message.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "counting"
    }

    fn config(&self) -> &TargetConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut TargetConfig {
        &mut self.config
    }
}

// ============================================================================
// SeverityLevel Tests
// ============================================================================

proptest! {
    /// Ordering of levels matches ordering of their numeric values
    #[test]
    fn test_severity_ordering(level1 in any_level(), level2 in any_level()) {
        prop_assert_eq!(level1 < level2, level1.value() < level2.value());
        prop_assert_eq!(level1 == level2, level1.value() == level2.value());
    }

    #[test]
    fn test_severity_value_roundtrip(level in any_level()) {
        prop_assert_eq!(SeverityLevel::from(level.value()), level);
        prop_assert_eq!(level.as_str().parse::<SeverityLevel>(), Ok(level));
    }

    /// Integers outside -2..=5 render as unknown
    #[test]
    fn test_out_of_range_values_fall_back(value in prop_oneof![i32::MIN..-2, 6..i32::MAX]) {
        prop_assert_eq!(leveled_logger::severity_to_label(value), "[ UNKNOWN ]");
        prop_assert_eq!(leveled_logger::severity_to_color_code(value), "\x1b[90m");
    }
}

// ============================================================================
// Filtering and Fan-out Tests
// ============================================================================

proptest! {
    /// Every target sees exactly the messages at or above the threshold
    #[test]
    fn test_fan_out_respects_threshold(
        threshold in -4i32..8,
        levels in prop::collection::vec(any_level(), 0..40),
        target_count in 0usize..4,
    ) {
        let logger = Logger::new();
        logger.set_verbose_level(threshold);

        let sinks: Vec<_> = (0..target_count)
            .map(|_| {
                let calls = Arc::new(Mutex::new(Vec::new()));
                logger.add_target(Counting {
                    config: TargetConfig::default(),
                    calls: Arc::clone(&calls),
                });
                calls
            })
            .collect();

        for (i, level) in levels.iter().enumerate() {
            logger.log(*level, format!("message {}", i));
        }

        let expected: Vec<_> = levels
            .iter()
            .enumerate()
            .filter(|(_, level)| level.value() >= threshold)
            .map(|(i, level)| (*level, format!("message {}", i)))
            .collect();

        for calls in sinks {
            prop_assert_eq!(&*calls.lock(), &expected);
        }
        prop_assert_eq!(logger.metrics().dispatched() as usize, expected.len());
        prop_assert_eq!(
            logger.metrics().filtered() as usize,
            levels.len() - expected.len()
        );
    }

    /// Registration order is dispatch order, whatever was deleted in between
    #[test]
    fn test_handles_track_container(ops in prop::collection::vec(any::<Option<prop::sample::Index>>(), 0..40)) {
        let logger = Logger::new();
        let mut live: Vec<TargetHandle> = Vec::new();

        for op in ops {
            match op {
                Some(index) if !live.is_empty() => {
                    let handle = live.remove(index.index(live.len()));
                    prop_assert!(logger.delete_target(handle).is_some());
                    prop_assert!(logger.delete_target(handle).is_none());
                }
                _ => live.push(logger.add_target(ConsoleTarget::new())),
            }
            prop_assert_eq!(logger.handles(), live.clone());
            prop_assert_eq!(logger.target_count(), live.len());
        }
    }
}

// ============================================================================
// Template Tests
// ============================================================================

proptest! {
    /// Sequential placeholders agree with `format!`
    #[test]
    fn test_sequential_template_matches_format(
        a in "[a-z0-9 ]*",
        b in any::<i64>(),
        text in "[a-zA-Z .,!]*",
    ) {
        let rendered = template::render(&format!("{{}}{}{{}}", text), &[&a, &b]).unwrap();
        prop_assert_eq!(rendered, format!("{}{}{}", a, text, b));
    }

    /// Positional placeholders pick the right argument
    #[test]
    fn test_positional_template(args in prop::collection::vec("[a-z]{1,6}", 1..6), pick in any::<prop::sample::Index>()) {
        let index = pick.index(args.len());
        let refs: Vec<&dyn std::fmt::Display> =
            args.iter().map(|a| a as &dyn std::fmt::Display).collect();

        let rendered = template::render(&format!("<{{{}}}>", index), &refs).unwrap();
        prop_assert_eq!(rendered, format!("<{}>", args[index]));

        let past_end = format!("{{{}}}", args.len());
        prop_assert!(template::render(&past_end, &refs).is_err());
    }

    /// Brace-free text renders unchanged
    #[test]
    fn test_literal_text_unchanged(text in "[^{}]*") {
        prop_assert_eq!(template::render(&text, &[]).unwrap(), text);
    }
}

// ============================================================================
// Rendering Tests
// ============================================================================

proptest! {
    /// Without time or thread id, a line is fully determined by its inputs
    #[test]
    fn test_render_line_structure(
        prefix in "[A-Za-z\\[\\]]{0,10}",
        message in "[^\n]*",
        level in any_level(),
    ) {
        let config = TargetConfig {
            prefix: prefix.clone(),
            add_colors: false,
            whole_message_color: false,
            add_time: false,
            add_thread_id: false,
        };

        let line = config.render_line(level, &message);
        let head = if prefix.is_empty() { String::new() } else { format!("{} ", prefix) };
        prop_assert_eq!(line, format!("{}{} {}\n", head, level.label(), message));
    }
}
