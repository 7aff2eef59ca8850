use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::events::{Event, InputEvent, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::GENERIC_ERROR;
use crate::models::{SessionPayload, Teacher};
use crate::{session_api, teacher_api, Route};

/* -------------------------------------------------------------------------- */
/*                          mode and submission state                         */
/* -------------------------------------------------------------------------- */

/// Decided once at entry from the route, never re-inferred afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(i64),
}

impl FormMode {
    pub fn from_route_id(id: Option<i64>) -> Self {
        match id {
            Some(id) => FormMode::Update(id),
            None => FormMode::Create,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Create session",
            FormMode::Update(_) => "Update session",
        }
    }

    pub fn toast(&self) -> &'static str {
        match self {
            FormMode::Create => "Session created !",
            FormMode::Update(_) => "Session updated !",
        }
    }
}

/// Editing -> Submitting -> Succeeded | Failed. A failed submission returns
/// the form to the editable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitState {
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmitState::Editing | SubmitState::Failed)
    }

    pub fn begin(self) -> Self {
        if self.can_submit() {
            SubmitState::Submitting
        } else {
            self
        }
    }

    pub fn finish(self, ok: bool) -> Self {
        match self {
            SubmitState::Submitting if ok => SubmitState::Succeeded,
            SubmitState::Submitting => SubmitState::Failed,
            other => other,
        }
    }
}

pub fn form_valid(name: &str, date: &str, teacher_id: i64, description: &str) -> bool {
    !name.is_empty() && !date.is_empty() && teacher_id > 0 && !description.is_empty()
}

/* -------------------------------------------------------------------------- */
/*                               form component                               */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct SessionFormProps {
    /// Present on `/sessions/update/{id}`, absent on `/sessions/create`.
    #[prop_or_default]
    pub id: Option<i64>,
}

#[function_component(SessionForm)]
pub fn session_form(props: &SessionFormProps) -> Html {
    let navigator = use_navigator().unwrap();
    let mode = *use_state(|| FormMode::from_route_id(props.id));

    let teachers = use_state(Vec::<Teacher>::new);
    let name = use_state(String::new);
    let date = use_state(String::new);
    let teacher_id = use_state(|| -1_i64);
    let description = use_state(String::new);

    let state = use_state(|| SubmitState::Editing);
    let error = use_state(String::new);
    let toast = use_state(String::new);

    /* -------------- initial load -------------- */
    {
        let teachers = teachers.clone();
        let name = name.clone();
        let date = date.clone();
        let teacher_id = teacher_id.clone();
        let description = description.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match mode {
                    FormMode::Create => match teacher_api::all().await {
                        Ok(list) => teachers.set(list),
                        Err(e) => log::error!("teachers: {e}"),
                    },
                    FormMode::Update(id) => {
                        let (list, record) =
                            futures::join!(teacher_api::all(), session_api::detail(id));
                        match list {
                            Ok(list) => teachers.set(list),
                            Err(e) => log::error!("teachers: {e}"),
                        }
                        match record {
                            Ok(s) => {
                                name.set(s.name);
                                date.set(s.date);
                                teacher_id.set(s.teacher_id);
                                description.set(s.description);
                            }
                            Err(e) => log::error!("session {id}: {e}"),
                        }
                    }
                }
            });
            || ()
        });
    }

    /* -------------- handlers -------------- */

    let on_change_teacher = {
        let teacher_id = teacher_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            teacher_id.set(select.value().parse().unwrap_or(-1));
        })
    };

    let onsubmit = {
        let name = name.clone();
        let date = date.clone();
        let teacher_id = teacher_id.clone();
        let description = description.clone();
        let state = state.clone();
        let error = error.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            if !state.can_submit() || !form_valid(&name, &date, *teacher_id, &description) {
                return;
            }

            let payload = SessionPayload {
                name: (*name).clone(),
                date: (*date).clone(),
                teacher_id: *teacher_id,
                description: (*description).clone(),
            };

            state.set(state.begin());
            error.set(String::new());

            spawn_local({
                let state = state.clone();
                let error = error.clone();
                let toast = toast.clone();
                let navigator = navigator.clone();

                async move {
                    let result = match mode {
                        FormMode::Create => session_api::create(&payload).await,
                        FormMode::Update(id) => session_api::update(id, &payload).await,
                    };

                    match result {
                        Ok(_) => {
                            state.set(SubmitState::Submitting.finish(true));
                            toast.set(mode.toast().to_string());
                            TimeoutFuture::new(1_500).await;
                            navigator.push(&Route::Sessions);
                        }
                        Err(e) => {
                            log::error!("submit failed: {e}");
                            state.set(SubmitState::Submitting.finish(false));
                            error.set(GENERIC_ERROR.into());
                        }
                    }
                }
            });
        })
    };

    /* -------------- render -------------- */

    let submitting = !state.can_submit();

    html! {
        <div class="session-form">
            <h2>{ mode.title() }</h2>

            <form {onsubmit}>
                <label>{"Name"}</label>
                <input
                    type="text"
                    value={(*name).clone()}
                    oninput={Callback::from({
                        let name = name.clone();
                        move |e: InputEvent| {
                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                name.set(input.value());
                            }
                        }
                    })}
                />

                <label>{"Date"}</label>
                <input
                    type="date"
                    value={(*date).clone()}
                    oninput={Callback::from({
                        let date = date.clone();
                        move |e: InputEvent| {
                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                date.set(input.value());
                            }
                        }
                    })}
                />

                <label>{"Teacher"}</label>
                <select onchange={on_change_teacher}>
                    <option value="-1">{"Select a teacher"}</option>
                    { for teachers.iter().map(|t| html! {
                        <option key={t.id} value={t.id.to_string()} selected={t.id == *teacher_id}>
                            { t.full_name() }
                        </option>
                    }) }
                </select>

                <label>{"Description"}</label>
                <textarea
                    value={(*description).clone()}
                    oninput={Callback::from({
                        let description = description.clone();
                        move |e: InputEvent| {
                            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                                description.set(area.value());
                            }
                        }
                    })}
                />

                <button type="submit" disabled={submitting}>{"Save"}</button>
            </form>

            {
                if !error.is_empty() {
                    html!(<p class="error">{ &*error }</p>)
                } else {
                    Html::default()
                }
            }
            {
                if !toast.is_empty() {
                    html!(<div class="toast">{ &*toast }</div>)
                } else {
                    Html::default()
                }
            }
        </div>
    }
}

/* ---------------- tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_comes_from_the_route_once() {
        assert_eq!(FormMode::from_route_id(None), FormMode::Create);
        assert_eq!(FormMode::from_route_id(Some(2)), FormMode::Update(2));
    }

    #[test]
    fn mode_drives_title_and_toast() {
        assert_eq!(FormMode::Create.title(), "Create session");
        assert_eq!(FormMode::Update(2).title(), "Update session");
        assert_eq!(FormMode::Create.toast(), "Session created !");
        assert_eq!(FormMode::Update(2).toast(), "Session updated !");
    }

    #[test]
    fn submission_walks_the_state_machine() {
        let s = SubmitState::Editing;
        let s = s.begin();
        assert_eq!(s, SubmitState::Submitting);
        assert_eq!(s.finish(true), SubmitState::Succeeded);
        assert_eq!(s.finish(false), SubmitState::Failed);
    }

    #[test]
    fn a_failed_submission_can_be_retried() {
        let s = SubmitState::Failed;
        assert!(s.can_submit());
        assert_eq!(s.begin(), SubmitState::Submitting);
    }

    #[test]
    fn submitting_blocks_a_second_submit() {
        let s = SubmitState::Submitting;
        assert!(!s.can_submit());
        assert_eq!(s.begin(), SubmitState::Submitting);
        // finish is only meaningful while submitting
        assert_eq!(SubmitState::Editing.finish(true), SubmitState::Editing);
    }

    #[test]
    fn every_field_is_required() {
        assert!(form_valid("Evening Relaxation", "2024-07-01", 1, "Relax"));
        assert!(!form_valid("", "2024-07-01", 1, "Relax"));
        assert!(!form_valid("Evening Relaxation", "", 1, "Relax"));
        assert!(!form_valid("Evening Relaxation", "2024-07-01", -1, "Relax"));
        assert!(!form_valid("Evening Relaxation", "2024-07-01", 1, ""));
    }
}
