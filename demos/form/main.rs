//! A small form with three selects.
//!
//! - Colors: preselected "Gray", new colors can be added
//! - Cities: a long list with duplicates, loaded a page at a time
//! - Area: starts empty, every value is added by the user
//!
//! `tab` moves focus between the fields, `ctrl+s` shows the form value and
//! `ctrl+c` quits. Set `RUST_LOG=bubbletea_select=debug` to see the widget's
//! logs on stderr.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use bubbletea_rs::{batch, quit, Cmd, KeyMsg, Model, Msg, Program};
use bubbletea_select::prelude::*;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const COLORS: &[&str] = &[
    "Red", "Blue", "Green", "Yellow", "Purple", "Orange", "Pink", "Brown", "Gray", "Black",
    "White", "Cyan", "Magenta", "Lime", "Teal", "Olive", "Maroon", "Navy", "Gold", "Silver",
];

const CITIES: &[&str] = &[
    "Mumbai", "Delhi", "Bengaluru", "Hyderabad", "Ahmedabad", "Chennai", "Kolkata", "Pune",
    "Jaipur", "Surat", "Lucknow", "Kanpur", "Nagpur", "Indore", "Thane", "Bhopal",
    "Visakhapatnam", "Patna", "Vadodara", "Ghaziabad", "Ludhiana", "Agra", "Nashik",
    "Faridabad", "Meerut", "Rajkot", "Varanasi", "Srinagar", "Aurangabad", "Dhanbad",
    "Amritsar", "Navi Mumbai", "Allahabad", "Ranchi", "Howrah", "Coimbatore", "Jabalpur",
    "Gwalior", "Vijayawada", "Jodhpur", "Madurai", "Raipur", "Kota", "Guwahati", "Chandigarh",
    "Solapur", "Mysore", "Tiruchirappalli", "Salem", "Aligarh", "Thiruvananthapuram", "Guntur",
    "Bikaner", "Noida", "Jamshedpur", "Cuttack", "Kochi", "Dehradun", "Ajmer", "Udaipur",
    "Tumkur", "Khammam", "Ongole", "Dibrugarh", "Purnia", "Satna", "Panipat", "Aizawl",
    "Tirupati", "Karnal", "Eluru", "Sikar", "Tumkur", "Rewa", "Satara", "Mau", "Imphal",
    "Latur", "Guntur", "Nagercoil", "Rewa", "Durg", "Shimla", "Sikar", "Tonk",
];

type FormValue = Arc<Mutex<BTreeMap<&'static str, Option<String>>>>;

struct App {
    fields: Vec<(&'static str, Select)>,
    focus: usize,
    form: FormValue,
    saved: Option<String>,
}

fn field(name: &'static str, mut select: Select, form: &FormValue) -> (&'static str, Select) {
    if let Ok(mut f) = form.lock() {
        f.insert(name, select.list().selection().map(String::from));
    }

    let sink = Arc::clone(form);
    select.register_on_change(Box::new(move |value| {
        info!(field = name, ?value, "form value changed");
        if let Ok(mut f) = sink.lock() {
            f.insert(name, value.map(String::from));
        }
    }));
    select.register_on_touched(Box::new(move || info!(field = name, "touched")));
    (name, select)
}

impl App {
    fn cycle_focus(&mut self) {
        if let Some((_, current)) = self.fields.get_mut(self.focus) {
            current.blur();
        }
        self.focus = (self.focus + 1) % self.fields.len();
        if let Some((_, next)) = self.fields.get_mut(self.focus) {
            next.focus();
        }
    }

    fn snapshot(&self) -> String {
        match self.form.lock() {
            Ok(form) => form
                .iter()
                .map(|(k, v)| format!("{k}: {}", v.as_deref().unwrap_or("null")))
                .collect::<Vec<_>>()
                .join(", "),
            Err(_) => "form unavailable".to_string(),
        }
    }
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let form: FormValue = Arc::new(Mutex::new(BTreeMap::new()));

        let colors = Select::new(
            Config::default()
                .with_label("Colors")
                .with_default_value("Gray")
                .with_clearable(true),
            COLORS.iter().copied(),
        );

        let mut cities = Select::new(
            Config::default()
                .with_label("Cities")
                .with_placeholder("Type the name of a city to search")
                .with_page_size(10)
                .with_max_visible(6),
            CITIES.iter().copied(),
        );
        cities.list_mut().set_validators(vec![required()]);

        let area = Select::new(
            Config::default()
                .with_label("Area")
                .with_add_new_label("Create")
                .with_no_options_label("No areas yet"),
            Vec::<String>::new(),
        );

        let mut app = App {
            fields: vec![
                field("colors", colors, &form),
                field("cities", cities, &form),
                field("area", area, &form),
            ],
            focus: 0,
            form,
            saved: None,
        };
        if let Some((_, first)) = app.fields.first_mut() {
            first.focus();
        }
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(events) = msg.downcast_ref::<SelectEventsMsg>() {
            for event in &events.events {
                info!(select = events.id, ?event, "select event");
            }
            return None;
        }

        let key = msg.downcast_ref::<KeyMsg>()?.clone();
        match (key.key, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(quit()),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                let value = self.snapshot();
                info!(form = %value, "form submitted");
                self.saved = Some(value);
                return None;
            }
            (KeyCode::Tab, _) => self.cycle_focus(),
            _ => {}
        }

        // Unfocused selects ignore keys but still hand out queued events.
        let cmds: Vec<Cmd> = self
            .fields
            .iter_mut()
            .filter_map(|(_, select)| select.update(Box::new(key.clone()) as Msg))
            .collect();
        if cmds.is_empty() {
            None
        } else {
            Some(batch(cmds))
        }
    }

    fn view(&self) -> String {
        let title = Style::new()
            .bold(true)
            .foreground(Color::from("#EE6FF8"))
            .render("Select demo");
        let hint = Style::new()
            .foreground(Color::from("#626262"))
            .render("tab next field • ctrl+s show value • ctrl+c quit");

        let mut sections = vec![title, String::new()];
        for (_, select) in &self.fields {
            sections.push(select.view());
            sections.push(String::new());
        }
        if let Some(saved) = &self.saved {
            sections.push(format!("Form value: {{ {saved} }}"));
        }
        sections.push(hint);
        sections.join("\n")
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
