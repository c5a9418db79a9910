//! The process-wide logger. Kept to a single test: the global is shared by
//! every test in this binary.

use catlog::{Category, CategoryMask, Logger, MemoryOutput, global};

#[test]
fn global_logger_lifecycle() {
    let memory = MemoryOutput::new();
    assert!(global::install(Logger::builder().output(memory.clone()).build()).is_ok());
    assert!(global::install(Logger::builder().build()).is_err());

    assert_eq!(global::enabled_categories(), CategoryMask::ALL);

    global::net("connected", None);
    global::model("loaded", Some("save"));
    global::trace("tick");
    global::table(&["a"], None);
    assert_eq!(memory.take().len(), 6);

    global::set_enabled_categories(Some(CategoryMask::from(Category::Net)));
    global::net("dropped", None);
    assert!(memory.is_empty());

    global::set_enabled_categories(None);
    assert_eq!(global::enabled_categories(), CategoryMask::from(Category::Net));

    global::enable(Category::Trace);
    global::view("kept", None);
    global::disable(Category::Trace);
    global::business("dropped", None);
    global::config("dropped", None);
    assert_eq!(memory.take().len(), 1);

    global::initialize();
    global::initialize();
    assert_eq!(global::enabled_categories(), CategoryMask::ALL);
}
