//! Tests for category gating, formatting, and dispatch.

use catlog::output::{LogRecord, Output};
use catlog::{CallerSource, Category, CategoryMask, Color, GateMode, Logger, MemoryOutput};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const STAMP_LEN: usize = "[00:00:00:000]".len();

fn memory_logger() -> (Logger, MemoryOutput) {
    let memory = MemoryOutput::new();
    let logger = Logger::builder().output(memory.clone()).build();
    (logger, memory)
}

/// Line without its leading timestamp.
fn body(line: &str) -> &str {
    &line[STAMP_LEN..]
}

#[test]
fn builder_default() {
    let logger = Logger::builder().build();
    assert_eq!(logger.enabled_categories(), CategoryMask::ALL);
    assert_eq!(logger.gate_mode(), GateMode::Trace);
    assert_eq!(logger.caller_source(), CallerSource::Location);
    assert_eq!(logger.output_count(), 0);
}

#[test]
fn builder_with_terminal_and_memory() {
    let logger = Logger::builder()
        .terminal()
        .colors(false)
        .done()
        .output(MemoryOutput::new())
        .build();
    assert_eq!(logger.output_count(), 2);
}

#[test]
fn trace_bit_gates_categorized_lines() {
    let (logger, memory) = memory_logger();

    logger.set_enabled_categories(Some(CategoryMask::from(Category::Net)));
    logger.net("request sent");
    assert!(memory.is_empty());

    logger.set_enabled_categories(Some(Category::Net | Category::Trace));
    logger.net("request sent");
    assert_eq!(memory.lines().len(), 1);
}

#[test]
fn trace_bit_alone_lets_every_category_through() {
    let (logger, memory) = memory_logger();
    logger.set_enabled_categories(Some(CategoryMask::from(Category::Trace)));

    logger.net("a");
    logger.model("b");
    logger.business("c");
    logger.view("d");
    logger.config("e");

    assert_eq!(memory.lines().len(), 5);
}

#[test]
fn category_gate_checks_own_bit_only() {
    let memory = MemoryOutput::new();
    let logger = Logger::builder()
        .gate(GateMode::Category)
        .categories(CategoryMask::from(Category::Net))
        .output(memory.clone())
        .build();

    logger.net("kept");
    logger.view("dropped");
    logger.trace("dropped too");

    let lines = memory.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(": kept"));
}

#[test]
fn unset_mask_leaves_state_unchanged() {
    let logger = Logger::builder().build();
    let mask = Category::View | Category::Config;
    logger.set_enabled_categories(Some(mask));
    logger.set_enabled_categories(None);
    assert_eq!(logger.enabled_categories(), mask);
}

#[test]
fn none_mask_silences_everything() {
    let (logger, memory) = memory_logger();
    logger.set_enabled_categories(Some(CategoryMask::NONE));

    logger.net("x");
    logger.trace("y");
    logger.table(&[1, 2], None);

    assert!(memory.is_empty());
}

#[test]
fn initialize_enables_every_category() {
    let (logger, memory) = memory_logger();
    logger.set_enabled_categories(Some(CategoryMask::NONE));
    logger.initialize();

    for category in Category::all() {
        assert!(logger.is_enabled(category), "{category} should be enabled");
    }

    logger.net("n");
    logger.model("m");
    logger.business("b");
    logger.view("v");
    logger.config("c");
    logger.trace("t");
    assert_eq!(memory.lines().len(), 6);
}

#[test]
fn initialize_is_idempotent() {
    let logger = Logger::builder().categories(CategoryMask::NONE).build();
    logger.initialize();
    let once = logger.enabled_categories();
    logger.initialize();
    assert_eq!(logger.enabled_categories(), once);
    assert_eq!(once, CategoryMask::ALL);
}

#[test]
fn enable_and_disable_touch_one_bit() {
    let logger = Logger::builder().categories(CategoryMask::NONE).build();

    logger.enable(Category::Model);
    logger.enable(Category::Trace);
    assert_eq!(logger.enabled_categories(), Category::Model | Category::Trace);

    logger.disable(Category::Model);
    assert_eq!(
        logger.enabled_categories(),
        CategoryMask::from(Category::Trace)
    );
}

#[test]
fn categorized_line_layout() {
    let (logger, memory) = memory_logger();
    logger.model("score=10");
    let line = memory.lines().remove(0);
    let expected_line = line!() - 2;

    assert!(line.starts_with('['));
    assert_eq!(
        body(&line),
        format!("[data log][logger->{expected_line}]: score=10")
    );
}

#[test]
fn each_category_uses_its_label() {
    let (logger, memory) = memory_logger();
    logger.net("x");
    logger.model("x");
    logger.business("x");
    logger.view("x");
    logger.config("x");

    let labels: Vec<String> = memory
        .lines()
        .iter()
        .map(|l| body(l).split(']').next().unwrap_or_default().to_string())
        .collect();
    assert_eq!(
        labels,
        vec![
            "[network log",
            "[data log",
            "[business log",
            "[view log",
            "[config log"
        ]
    );
}

#[test]
fn description_is_rendered_as_prefix() {
    let (logger, memory) = memory_logger();
    logger.net_with("200 OK", Some("login"));
    let line = memory.lines().remove(0);
    assert!(line.ends_with(": login: 200 OK"), "{line}");
}

#[test]
fn trace_skips_tag_and_caller() {
    let (logger, memory) = memory_logger();
    logger.trace("hello");
    logger.business("world");

    let lines = memory.lines();
    assert_eq!(body(&lines[0]), "hello");
    assert!(body(&lines[1]).starts_with("[business log][logger->"));
}

#[test]
fn table_skips_tag_and_caller() {
    let (logger, memory) = memory_logger();
    logger.table(&vec![("a", 1)], Some("pairs"));

    let lines = memory.lines();
    assert_eq!(lines[0], "pairs");
    assert_eq!(lines[1], "| (index) | Values  |");
    assert_eq!(lines[3], "| 0       | [\"a\",1] |");
    assert!(lines.iter().all(|l| !l.contains("log]")));
}

#[test]
fn try_table_reports_unserializable_values() {
    let (logger, memory) = memory_logger();
    let by_cell: std::collections::HashMap<(u8, u8), u8> = [((0, 0), 1)].into_iter().collect();

    let err = logger.try_table(&by_cell, None).unwrap_err();
    assert!(matches!(err, catlog::Error::Serialize(_)));

    logger.table(&by_cell, None);
    assert!(memory.is_empty());
}

#[test]
fn try_table_is_silent_without_trace() {
    let (logger, memory) = memory_logger();
    logger.disable(Category::Trace);

    assert!(logger.try_table(&[1, 2], Some("hidden")).is_ok());
    assert!(memory.is_empty());
}

#[test]
fn trace_uses_supplied_color() {
    let memory = MemoryOutput::new().colors(true);
    let logger = Logger::builder().output(memory.clone()).build();

    logger.trace("plain");
    logger.trace_with_color("red", Color::new(255, 0, 0));

    let lines = memory.lines();
    assert!(lines[0].starts_with(&Color::white().fg_ansi()));
    assert!(lines[1].starts_with("\x1b[38;2;255;0;0m"));
    assert!(lines[1].ends_with(Color::RESET));
}

#[test]
fn category_colors_are_fixed_per_method() {
    let memory = MemoryOutput::new().colors(true);
    let logger = Logger::builder().output(memory.clone()).build();

    logger.net("x");
    logger.view("x");

    let lines = memory.lines();
    assert!(lines[0].starts_with(&Color::from_hex("#ff6100").fg_ansi()));
    assert!(lines[1].starts_with(&Color::from_hex("#00ff00").fg_ansi()));
}

#[test]
fn overrides_for_label_and_color() {
    let memory = MemoryOutput::new().colors(true);
    let logger = Logger::builder()
        .label(Category::Net, "NET")
        .color(Category::Net, Color::new(1, 2, 3))
        .output(memory.clone())
        .build();

    logger.net("x");

    assert_eq!(logger.label(Category::Net), "NET");
    let line = memory.lines().remove(0);
    assert!(line.starts_with("\x1b[38;2;1;2;3m"));
    assert!(line.contains("[NET]"));
}

#[test]
fn caller_source_none_leaves_no_hint() {
    let memory = MemoryOutput::new();
    let logger = Logger::builder()
        .caller_source(CallerSource::None)
        .output(memory.clone())
        .build();

    logger.view("opened");

    assert_eq!(body(&memory.lines()[0]), "[view log]: opened");
}

#[test]
fn source_suffix_is_appended_to_first_part() {
    let memory = MemoryOutput::new();
    let logger = Logger::builder()
        .source_suffix(".rs")
        .output(memory.clone())
        .build();

    logger.config("loaded");

    assert!(body(&memory.lines()[0]).starts_with("[config log][logger.rs->"));
}

#[test]
fn custom_template() {
    let memory = MemoryOutput::new().template("{category}|{tag}|{msg}");
    let logger = Logger::builder().output(memory.clone()).build();

    logger.business("checkout");

    assert_eq!(memory.lines()[0], "business|[business log]|checkout");
}

struct FailingOutput {
    attempts: Arc<AtomicUsize>,
}

impl Output for FailingOutput {
    fn write(&self, _record: &LogRecord) -> Result<(), catlog::Error> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(std::io::Error::other("sink closed").into())
    }

    fn flush(&self) -> Result<(), catlog::Error> {
        Err(std::io::Error::other("sink closed").into())
    }
}

#[test]
fn sink_errors_do_not_reach_the_caller() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let memory = MemoryOutput::new();
    let logger = Logger::builder()
        .output(FailingOutput {
            attempts: Arc::clone(&attempts),
        })
        .output(memory.clone())
        .build();

    logger.net("still delivered");

    assert_eq!(attempts.load(Ordering::SeqCst), 1);
    assert_eq!(memory.lines().len(), 1);
    assert!(logger.flush().is_err());
}

#[test]
fn logger_is_shareable_across_threads() {
    let (logger, memory) = memory_logger();
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || logger.model(format!("worker {i}")))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(memory.take().len(), 4);
    assert!(memory.is_empty());
}
