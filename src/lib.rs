use enclose::enc;
use indexmap::IndexMap;
use seed::browser::web_storage::{LocalStorage, WebStorage};
use seed::{prelude::*, *};
use web_sys::HtmlInputElement;

pub mod engine;
pub mod form;
pub mod grade;
pub mod theme;
pub mod util;

use engine::Scores;
use form::FormState;
use grade::Grade;
use theme::Theme;

const ENTER_KEY: u32 = 13;
const STORAGE_KEY: &str = "gpacalc-theme";

// ------ ------
//     Model
// ------ ------

struct Model {
    form: FormState,
    scale: IndexMap<String, Grade>,
    scores: Option<Scores>,
    theme: Theme,
    refs: Refs,
}

#[derive(Default)]
struct Refs {
    first_credit_input: ElRef<HtmlInputElement>,
}

// ------ ------
//     Init
// ------ ------

fn init(_: Url, _: &mut impl Orders<Msg>) -> Model {
    Model {
        form: FormState::default(),
        scale: Grade::defaults(),
        scores: None,
        theme: LocalStorage::get(STORAGE_KEY).unwrap_or_default(),
        refs: Refs::default(),
    }
}

// ------ ------
//    Update
// ------ ------

enum Msg {
    PreviousCgpaChanged(String),
    PreviousCreditsChanged(String),

    SubjectCountChanged(String),
    SubjectGradeChanged(usize, String),
    SubjectCreditChanged(usize, String),

    Calculate,

    ToggleTheme,

    NoOp,
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::PreviousCgpaChanged(value) => {
            model.form.set_previous_cgpa(value);
        }
        Msg::PreviousCreditsChanged(value) => {
            model.form.set_previous_credits(value);
        }

        Msg::SubjectCountChanged(value) => {
            model.form.set_subject_count(util::parse_count(&value));

            let input = model.refs.first_credit_input.clone();
            orders.after_next_render(move |_| {
                if let Some(input) = input.get() {
                    input.select();
                }
                Msg::NoOp
            });
        }
        Msg::SubjectGradeChanged(index, value) => {
            model.form.set_subject_grade(index, value);
        }
        Msg::SubjectCreditChanged(index, value) => {
            model.form.set_subject_credit(index, value);
        }

        Msg::Calculate => {
            model.scores = Some(engine::compute_grades(
                &model.form.previous_cgpa,
                &model.form.previous_credits,
                &model.form.subjects,
                &model.scale,
            ));
        }

        Msg::ToggleTheme => {
            model.theme.toggle();
            LocalStorage::insert(STORAGE_KEY, &model.theme).expect("save theme to LocalStorage");
        }

        Msg::NoOp => (),
    }
}

// ------ ------
//     View
// ------ ------

fn view(model: &Model) -> Node<Msg> {
    div![
        C!["app", model.theme.class()],
        view_header(&model.theme),
        view_previous(&model.form),
        view_subject_count(model.form.subjects.len()),
        view_subjects(
            &model.form.subjects,
            &model.scale,
            &model.refs.first_credit_input,
        ),
        view_calculate(),
        view_scores(&model.scores),
    ]
}

// ------ header ------

fn view_header(theme: &Theme) -> Node<Msg> {
    header![
        C!["header"],
        h1!["CGPA & SGPA Calculator"],
        button![
            C!["theme-toggle"],
            ev(Ev::Click, |_| Msg::ToggleTheme),
            theme.toggle_label(),
        ],
    ]
}

// ------ previous record ------

fn view_previous(form: &FormState) -> Node<Msg> {
    section![
        C!["previous"],
        div![
            C!["field"],
            label!["Previous CGPA"],
            input![
                attrs! {
                    At::Type => "number",
                    At::Placeholder => "0.00",
                    At::Value => form.previous_cgpa,
                },
                input_ev(Ev::Input, Msg::PreviousCgpaChanged),
            ],
        ],
        div![
            C!["field"],
            label!["Previous Credits"],
            input![
                attrs! {
                    At::Type => "number",
                    At::Placeholder => "0.00",
                    At::Value => form.previous_credits,
                },
                input_ev(Ev::Input, Msg::PreviousCreditsChanged),
            ],
        ],
    ]
}

// ------ subjects ------

fn view_subject_count(count: usize) -> Node<Msg> {
    section![
        C!["field"],
        label!["Number of Subjects"],
        input![
            attrs! {
                At::Type => "number",
                At::Min => "1",
                At::Value => count.to_string(),
            },
            input_ev(Ev::Input, Msg::SubjectCountChanged),
        ],
    ]
}

fn view_subjects(
    subjects: &[form::SubjectEntry],
    scale: &IndexMap<String, Grade>,
    first_credit_input: &ElRef<HtmlInputElement>,
) -> Node<Msg> {
    if subjects.is_empty() {
        return empty![];
    }

    table![
        C!["subjects"],
        thead![tr![th!["Subject"], th!["Grade"], th!["Credit"]]],
        tbody![subjects
            .iter()
            .enumerate()
            .map(|(index, subject)| view_subject_row(
                index,
                subject,
                scale,
                first_credit_input
            ))],
    ]
}

fn view_subject_row(
    index: usize,
    subject: &form::SubjectEntry,
    scale: &IndexMap<String, Grade>,
    first_credit_input: &ElRef<HtmlInputElement>,
) -> Node<Msg> {
    tr![
        td![C!["subject-number"], (index + 1).to_string()],
        td![select![
            C!["grade-select"],
            scale.iter().map(|(symbol, grade)| {
                option![
                    attrs! {
                        At::Value => symbol.clone(),
                        At::Selected => (&subject.grade == symbol).as_at_value(),
                    },
                    &grade.label,
                ]
            }),
            input_ev(
                Ev::Change,
                enc!((index) move |value| Msg::SubjectGradeChanged(index, value))
            ),
        ]],
        td![input![
            C!["credit-input"],
            IF!(index == 0 => el_ref(first_credit_input)),
            attrs! {
                At::Type => "number",
                At::Placeholder => "0.00",
                At::Value => subject.credit,
            },
            input_ev(
                Ev::Input,
                enc!((index) move |value| Msg::SubjectCreditChanged(index, value))
            ),
            keyboard_ev(Ev::KeyDown, |keyboard_event| {
                if keyboard_event.key_code() == ENTER_KEY {
                    Msg::Calculate
                } else {
                    Msg::NoOp
                }
            }),
        ]],
    ]
}

// ------ results ------

fn view_calculate() -> Node<Msg> {
    div![
        C!["calculate"],
        button![
            C!["calculate-button"],
            ev(Ev::Click, |_| Msg::Calculate),
            "Calculate",
        ],
    ]
}

fn view_scores(scores: &Option<Scores>) -> Node<Msg> {
    match scores {
        Some(scores) => section![
            C!["scores"],
            div![
                C!["score"],
                span![C!["score-label"], "Your SGPA:"],
                span![C!["score-value"], &scores.sgpa],
            ],
            div![
                C!["score"],
                span![C!["score-label"], "Your CGPA:"],
                span![C!["score-value"], &scores.cgpa],
            ],
        ],
        None => empty![],
    }
}

// ------ ------
//     Start
// ------ ------

#[wasm_bindgen(start)]
pub fn render() {
    App::start("app", init, update, view);
}
