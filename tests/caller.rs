//! Caller hints as they appear in logged lines.

use catlog::caller::stack::{Frame, STACK_SKIP_DEPTH, hint_from_frames, hint_from_trace};
use catlog::{CallerHint, CallerSource, Logger, MemoryOutput};

#[test]
fn two_part_hint() {
    let frames: Vec<Frame> = ["f0", "f1", "f2", "f3", "f4", "Foo.bar scripts/Foo.js:3:1"]
        .iter()
        .map(|l| Frame::parse(l))
        .collect();
    let hint = hint_from_frames(&frames, STACK_SKIP_DEPTH);
    assert_eq!(hint.to_string(), "[Foo->bar]");
}

#[test]
fn one_part_hint() {
    let frames = vec![Frame::parse("Baz (src/game/Baz.ts:9:2)")];
    assert_eq!(hint_from_frames(&frames, 0).to_string(), "[Baz]");
}

#[test]
fn short_stack_has_no_hint() {
    let hint = hint_from_trace("at a x.js\nat b y.js\n");
    assert_eq!(hint, CallerHint::Empty);
    assert_eq!(hint.to_string(), "");
}

#[test]
fn location_hint_points_at_call_site() {
    let memory = MemoryOutput::new().template("{caller}");
    let logger = Logger::builder().output(memory.clone()).build();

    logger.net("x");
    let line = line!() - 1;

    assert_eq!(memory.lines(), vec![format!("[caller->{line}]")]);
}

fn stack_logger() -> (Logger, MemoryOutput) {
    let memory = MemoryOutput::new().template("{tag}|{caller}|{msg}");
    let logger = Logger::builder()
        .caller_source(CallerSource::Stack)
        .output(memory.clone())
        .build();
    (logger, memory)
}

#[test]
fn stack_source_keeps_tag_and_message() {
    let (logger, memory) = stack_logger();

    logger.model("walked");

    let line = memory.lines().remove(0);
    assert!(line.starts_with("[data log]|"));
    assert!(line.ends_with("|walked"));
}

// Release builds may inline the calling frame away.
#[cfg(debug_assertions)]
#[test]
fn stack_source_names_calling_function() {
    let (logger, memory) = stack_logger();

    logger.model("walked");

    assert_eq!(
        memory.lines(),
        vec!["[data log]|[caller->stack_source_names_calling_function]|walked"]
    );
}

#[cfg(debug_assertions)]
struct Widget<'a> {
    logger: &'a Logger,
}

#[cfg(debug_assertions)]
impl std::fmt::Display for Widget<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.logger.view("rendering");
        f.write_str("widget")
    }
}

#[cfg(debug_assertions)]
#[test]
fn stack_source_names_trait_impl_type() {
    let (logger, memory) = stack_logger();

    let rendered = Widget { logger: &logger }.to_string();

    assert_eq!(rendered, "widget");
    assert_eq!(memory.lines(), vec!["[view log]|[Widget->fmt]|rendering"]);
}

#[cfg(debug_assertions)]
#[test]
fn stack_source_skips_closure_frames() {
    let (logger, memory) = stack_logger();

    let notify = |msg: &str| logger.net(msg);
    notify("sent");

    assert_eq!(
        memory.lines(),
        vec!["[network log]|[caller->stack_source_skips_closure_frames]|sent"]
    );
}
