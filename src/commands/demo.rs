//! `pickmenu demo`: a nested menu tour

use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;

use anyhow::Result;
use pickmenu::{ActionItem, CompositeMenu, Entry, Marks, MenuStyle, MultiMenu, SingleMenu};

use super::Context;

type Log = Rc<RefCell<Vec<String>>>;

const FRUITS: &[&str] = &["apple", "banana", "cherry", "kiwi", "mango", "peach"];
const TOPPINGS: &[&str] = &["cream", "honey", "nuts", "syrup", "yogurt"];

pub fn cmd_demo(ctx: &Context) -> Result<ExitCode> {
    let log: Log = Rc::default();
    let mut menu = build_demo_menu(ctx.style(), ctx.config.marks(), Rc::clone(&log));

    let mut console = ctx.console();
    let result = menu.show(&mut console);
    console.finish()?;
    result?;

    for line in log.borrow().iter() {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

fn build_demo_menu(style: MenuStyle, marks: Marks, log: Log) -> CompositeMenu {
    let fruit_log = Rc::clone(&log);
    let fruit = SingleMenu::new("Pick a fruit", FRUITS.iter().map(|s| s.to_string()))
        .with_style(style.clone())
        .with_callback(move |choice| fruit_log.borrow_mut().push(format!("fruit: {choice}")));

    let toppings_log = Rc::clone(&log);
    let toppings = MultiMenu::new("Pick toppings", TOPPINGS.iter().map(|s| s.to_string()))
        .with_style(style.clone())
        .with_marks(marks)
        .with_callback(move |chosen: Vec<String>| {
            toppings_log
                .borrow_mut()
                .push(format!("toppings: {}", chosen.join(", ")));
        });

    let number_log = Rc::clone(&log);
    let numbers = SingleMenu::new("Pick a number", 1..=40)
        .with_style(style.clone())
        .with_callback(move |n| number_log.borrow_mut().push(format!("number: {n}")));

    let clear_log = Rc::clone(&log);
    let more = CompositeMenu::new(
        "More",
        [
            Entry::menu(numbers),
            Entry::from(ActionItem::new("Clear log", move || {
                clear_log.borrow_mut().clear();
            })),
        ],
    )
    .with_style(style.clone());

    let hello_log = Rc::clone(&log);
    CompositeMenu::new(
        "Demo",
        [
            Entry::menu(fruit),
            Entry::menu(toppings),
            Entry::menu(more),
            Entry::from(ActionItem::new("Say hello", move || {
                hello_log.borrow_mut().push("hello".to_string());
            })),
        ],
    )
    .with_style(style)
}
