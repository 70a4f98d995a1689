//! Contact section: info panel plus a form whose submission is simulated
//! locally. No request leaves the page; a timed sequence stands in for the
//! round trip until a real submission backend exists.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::services::SERVICES;
use crate::config;
use crate::reveal::use_reveal;

/// Delay before the confirmation panel appears.
pub const ACK_DELAY_MS: u32 = 1_000;
/// Delay from confirmation back to the blank form.
pub const RESET_DELAY_MS: u32 = 3_000;

pub const GENERAL_INQUIRY: &str = "General Inquiry";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

pub enum SequencerAction {
    Submit,
    Acknowledge,
    Reset,
}

impl Reducible for SubmissionPhase {
    type Action = SequencerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match (action, *self) {
            (SequencerAction::Submit, _) => SubmissionPhase::Submitting,
            // Only an in-flight submit gets acknowledged; a timer left over
            // from a superseded sequence cannot conjure a confirmation.
            (SequencerAction::Acknowledge, SubmissionPhase::Submitting) => {
                SubmissionPhase::Submitted
            }
            (SequencerAction::Acknowledge, current) => current,
            (SequencerAction::Reset, _) => SubmissionPhase::Idle,
        };
        Rc::new(next)
    }
}

/// Seam between the sequencer and the browser's timers. Dropping a handle
/// cancels the callback it guards.
pub trait DelayScheduler: Clone + 'static {
    type Handle;

    fn after(&self, delay_ms: u32, run: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

impl DelayScheduler for BrowserScheduler {
    type Handle = Timeout;

    fn after(&self, delay_ms: u32, run: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, run)
    }
}

/// Arms the acknowledge-then-reset sequence, superseding whatever sequence is
/// still in flight. Both handles end up in `pending`; dropping them (unmount,
/// or the next submit) cancels anything that has not fired yet.
pub fn arm_submit_sequence<S: DelayScheduler>(
    scheduler: &S,
    pending: &Rc<RefCell<Vec<S::Handle>>>,
    on_ack: impl FnOnce() + 'static,
    on_reset: impl FnOnce() + 'static,
) {
    pending.borrow_mut().clear();
    let ack = scheduler.after(ACK_DELAY_MS, {
        let scheduler = scheduler.clone();
        let pending = pending.clone();
        Box::new(move || {
            on_ack();
            let reset = scheduler.after(RESET_DELAY_MS, Box::new(on_reset));
            pending.borrow_mut().push(reset);
        })
    });
    pending.borrow_mut().push(ack);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl Default for ContactFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            service: GENERAL_INQUIRY.to_string(),
            message: String::new(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub title: String,
    pub subtitle: String,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone());

    let fields = use_state(ContactFields::default);
    let phase = use_reducer(SubmissionPhase::default);
    let pending = use_mut_ref(Vec::<Timeout>::new);

    // Dropping the handles cancels whatever is still scheduled, so nothing
    // fires against an unmounted instance.
    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| move || pending.borrow_mut().clear(),
            (),
        );
    }

    let onsubmit = {
        let fields = fields.clone();
        let phase = phase.clone();
        let pending = pending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            phase.dispatch(SequencerAction::Submit);

            let on_ack = {
                let phase = phase.clone();
                move || phase.dispatch(SequencerAction::Acknowledge)
            };
            let on_reset = {
                let fields = fields.clone();
                let phase = phase.clone();
                move || {
                    phase.dispatch(SequencerAction::Reset);
                    fields.set(ContactFields::default());
                }
            };
            // Arming supersedes any sequence still in flight.
            arm_submit_sequence(&BrowserScheduler, &pending, on_ack, on_reset);
        })
    };

    let edit = |apply: fn(&mut ContactFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            apply(&mut next, input.value());
            fields.set(next);
        })
    };
    let on_name = edit(|f, v| f.name = v);
    let on_email = edit(|f, v| f.email = v);
    let on_phone = edit(|f, v| f.phone = v);
    let on_company = edit(|f, v| f.company = v);

    let on_service = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.service = select.value();
            fields.set(next);
        })
    };
    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.message = area.value();
            fields.set(next);
        })
    };

    let info_items = [
        ("Email", config::CONTACT_EMAIL),
        ("Phone", config::CONTACT_PHONE),
        ("Address", config::CONTACT_ADDRESS),
        ("Office Hours", config::CONTACT_HOURS),
    ];

    html! {
        <section ref={section_ref} class="contact-section">
            <style>
                {r#"
                    .contact-section { padding: 6rem 0; }
                    .contact-columns {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 2.5rem;
                        align-items: flex-start;
                    }
                    .contact-info {
                        flex: 1 1 300px;
                        padding: 2rem;
                    }
                    .contact-info h3, .contact-form-panel h3 {
                        margin-bottom: 1.5rem;
                    }
                    .info-item {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .info-item h4 { margin-bottom: 0.25rem; }
                    .info-item p {
                        color: #5c6370;
                        white-space: pre-line;
                    }
                    .contact-form-panel {
                        flex: 2 1 460px;
                        padding: 2rem;
                    }
                    .form-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .form-field label {
                        display: block;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                    }
                    .form-footer {
                        text-align: center;
                        margin-top: 1.5rem;
                    }
                    .nm-button:disabled {
                        opacity: 0.7;
                        cursor: wait;
                        transform: none;
                    }
                    .sent-panel {
                        text-align: center;
                        padding: 2.5rem;
                        background: #e4f3e6;
                        border-radius: 20px;
                    }
                    .sent-panel .nm-icon {
                        margin: 0 auto 1rem;
                        background: #3fa35a;
                    }
                    .sent-panel h4 {
                        color: #24703a;
                        font-size: 1.3rem;
                        margin-bottom: 0.5rem;
                    }
                    .sent-panel p { color: #3fa35a; }
                "#}
            </style>
            <div class="container">
                <div class={classes!("section-heading", visible.class("drop-in"))}>
                    <h2>{ &props.title }</h2>
                    <p>{ &props.subtitle }</p>
                </div>
                <div class="contact-columns">
                    <div class={classes!("nm-card", "contact-info", visible.class("slide-in-left"))}>
                        <h3>{"Talk to Us"}</h3>
                        { for info_items.iter().map(|(label, value)| html! {
                            <div class="info-item">
                                <div class="nm-icon">
                                    <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24"
                                        fill="none" stroke="#e8a100" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                        <path d="M4 6h16v12H4zM4 7l8 6 8-6" />
                                    </svg>
                                </div>
                                <div>
                                    <h4>{ *label }</h4>
                                    <p>{ *value }</p>
                                </div>
                            </div>
                        }) }
                    </div>

                    <div class={classes!("nm-card", "contact-form-panel", visible.class("slide-in-right"))}>
                        <h3>{"Send a Message"}</h3>
                        {
                            if *phase == SubmissionPhase::Submitted {
                                html! {
                                    <div class="sent-panel scale-in">
                                        <div class="nm-icon">
                                            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"
                                                fill="none" stroke="#ffffff" stroke-width="3" stroke-linecap="round" stroke-linejoin="round">
                                                <path d="M5 13l4 4 10-10" />
                                            </svg>
                                        </div>
                                        <h4>{"Message sent!"}</h4>
                                        <p>{"Thanks for reaching out. We will get back to you shortly."}</p>
                                    </div>
                                }
                            } else {
                                html! {
                                    <form {onsubmit}>
                                        <div class="form-grid">
                                            <div class="form-field">
                                                <label for="name">{"Full Name *"}</label>
                                                <input
                                                    id="name"
                                                    type="text"
                                                    class="nm-input"
                                                    placeholder="Your name"
                                                    required=true
                                                    value={fields.name.clone()}
                                                    oninput={on_name}
                                                />
                                            </div>
                                            <div class="form-field">
                                                <label for="email">{"Email *"}</label>
                                                <input
                                                    id="email"
                                                    type="email"
                                                    class="nm-input"
                                                    placeholder="you@example.com"
                                                    required=true
                                                    value={fields.email.clone()}
                                                    oninput={on_email}
                                                />
                                            </div>
                                            <div class="form-field">
                                                <label for="phone">{"Phone"}</label>
                                                <input
                                                    id="phone"
                                                    type="tel"
                                                    class="nm-input"
                                                    placeholder="(555) 000-0000"
                                                    value={fields.phone.clone()}
                                                    oninput={on_phone}
                                                />
                                            </div>
                                            <div class="form-field">
                                                <label for="company">{"Company"}</label>
                                                <input
                                                    id="company"
                                                    type="text"
                                                    class="nm-input"
                                                    placeholder="Your company"
                                                    value={fields.company.clone()}
                                                    oninput={on_company}
                                                />
                                            </div>
                                        </div>
                                        <div class="form-field">
                                            <label for="service">{"Service of Interest"}</label>
                                            <select
                                                id="service"
                                                class="nm-input"
                                                onchange={on_service}
                                            >
                                                <option value={GENERAL_INQUIRY} selected={fields.service == GENERAL_INQUIRY}>
                                                    { GENERAL_INQUIRY }
                                                </option>
                                                { for SERVICES.iter().map(|service| html! {
                                                    <option
                                                        value={service.name}
                                                        selected={fields.service == service.name}
                                                    >
                                                        { service.name }
                                                    </option>
                                                }) }
                                            </select>
                                        </div>
                                        <div class="form-field" style="margin-top: 1.5rem;">
                                            <label for="message">{"Message *"}</label>
                                            <textarea
                                                id="message"
                                                class="nm-input"
                                                rows="5"
                                                placeholder="Tell us about your project or question..."
                                                required=true
                                                value={fields.message.clone()}
                                                oninput={on_message}
                                            />
                                        </div>
                                        <div class="form-footer">
                                            <button
                                                type="submit"
                                                class="nm-button nm-button-primary"
                                                disabled={*phase == SubmissionPhase::Submitting}
                                            >
                                                {
                                                    if *phase == SubmissionPhase::Submitting {
                                                        "Sending..."
                                                    } else {
                                                        "Send Message"
                                                    }
                                                }
                                            </button>
                                        </div>
                                    </form>
                                }
                            }
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn step(phase: SubmissionPhase, action: SequencerAction) -> SubmissionPhase {
        *Rc::new(phase).reduce(action)
    }

    /// Manual clock standing in for the browser's timers.
    #[derive(Clone, Default)]
    struct TestScheduler {
        now: Rc<Cell<u32>>,
        next_id: Rc<Cell<u32>>,
        tasks: Rc<RefCell<Vec<Task>>>,
    }

    struct Task {
        id: u32,
        due: u32,
        run: Box<dyn FnOnce()>,
    }

    struct TaskHandle {
        id: u32,
        tasks: Rc<RefCell<Vec<Task>>>,
    }

    impl Drop for TaskHandle {
        fn drop(&mut self) {
            self.tasks.borrow_mut().retain(|task| task.id != self.id);
        }
    }

    impl DelayScheduler for TestScheduler {
        type Handle = TaskHandle;

        fn after(&self, delay_ms: u32, run: Box<dyn FnOnce()>) -> TaskHandle {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.tasks.borrow_mut().push(Task {
                id,
                due: self.now.get() + delay_ms,
                run,
            });
            TaskHandle {
                id,
                tasks: self.tasks.clone(),
            }
        }
    }

    impl TestScheduler {
        fn advance(&self, ms: u32) {
            let target = self.now.get() + ms;
            loop {
                // Release the borrow before running, since a fired task may
                // schedule the next one. Fire tasks in virtual-time order,
                // setting the clock to each task's due time first, so a task
                // scheduled from within a callback is stamped relative to the
                // moment its scheduler fired rather than the window end.
                let task = {
                    let mut tasks = self.tasks.borrow_mut();
                    let due = tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| task.due)
                        .map(|(index, _)| index);
                    due.map(|index| tasks.remove(index))
                };
                match task {
                    Some(task) => {
                        self.now.set(task.due);
                        (task.run)();
                    }
                    None => break,
                }
            }
            self.now.set(target);
        }
    }

    struct Rig {
        scheduler: TestScheduler,
        pending: Rc<RefCell<Vec<TaskHandle>>>,
        acked: Rc<Cell<u32>>,
        resets: Rc<Cell<u32>>,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                scheduler: TestScheduler::default(),
                pending: Rc::new(RefCell::new(Vec::new())),
                acked: Rc::new(Cell::new(0)),
                resets: Rc::new(Cell::new(0)),
            }
        }

        fn submit(&self) {
            let acked = self.acked.clone();
            let resets = self.resets.clone();
            arm_submit_sequence(
                &self.scheduler,
                &self.pending,
                move || acked.set(acked.get() + 1),
                move || resets.set(resets.get() + 1),
            );
        }

        fn unmount(&self) {
            self.pending.borrow_mut().clear();
        }
    }

    #[test]
    fn submit_enters_submitting_synchronously() {
        assert_eq!(
            step(SubmissionPhase::Idle, SequencerAction::Submit),
            SubmissionPhase::Submitting
        );
    }

    #[test]
    fn acknowledge_confirms_only_an_inflight_submit() {
        assert_eq!(
            step(SubmissionPhase::Submitting, SequencerAction::Acknowledge),
            SubmissionPhase::Submitted
        );
        // A stale timer firing while idle must not show the confirmation.
        assert_eq!(
            step(SubmissionPhase::Idle, SequencerAction::Acknowledge),
            SubmissionPhase::Idle
        );
    }

    #[test]
    fn reset_returns_to_idle() {
        assert_eq!(
            step(SubmissionPhase::Submitted, SequencerAction::Reset),
            SubmissionPhase::Idle
        );
    }

    #[test]
    fn full_cycle_is_restartable() {
        let mut phase = SubmissionPhase::default();
        for _ in 0..2 {
            phase = step(phase, SequencerAction::Submit);
            phase = step(phase, SequencerAction::Acknowledge);
            phase = step(phase, SequencerAction::Reset);
            assert_eq!(phase, SubmissionPhase::Idle);
        }
    }

    #[test]
    fn default_fields_are_blank_with_general_inquiry_selected() {
        let fields = ContactFields::default();
        assert!(fields.name.is_empty());
        assert!(fields.email.is_empty());
        assert!(fields.phone.is_empty());
        assert!(fields.company.is_empty());
        assert!(fields.message.is_empty());
        assert_eq!(fields.service, GENERAL_INQUIRY);
    }

    #[test]
    fn sequence_fires_ack_then_reset_at_the_documented_delays() {
        let rig = Rig::new();
        rig.submit();

        rig.scheduler.advance(ACK_DELAY_MS);
        assert_eq!(rig.acked.get(), 1);
        assert_eq!(rig.resets.get(), 0);

        rig.scheduler.advance(RESET_DELAY_MS);
        assert_eq!(rig.resets.get(), 1);
    }

    #[test]
    fn unmount_before_ack_silences_the_whole_sequence() {
        let rig = Rig::new();
        rig.submit();
        rig.unmount();

        rig.scheduler.advance(ACK_DELAY_MS + RESET_DELAY_MS);
        assert_eq!(rig.acked.get(), 0);
        assert_eq!(rig.resets.get(), 0);
    }

    #[test]
    fn unmount_mid_sequence_cancels_the_reset() {
        let rig = Rig::new();
        rig.submit();
        rig.scheduler.advance(ACK_DELAY_MS);
        assert_eq!(rig.acked.get(), 1);

        rig.unmount();
        rig.scheduler.advance(RESET_DELAY_MS);
        assert_eq!(rig.resets.get(), 0);
    }

    #[test]
    fn a_fresh_submit_supersedes_the_inflight_sequence() {
        let rig = Rig::new();
        rig.submit();
        rig.scheduler.advance(ACK_DELAY_MS / 2);
        rig.submit();

        // Only the second sequence is still armed.
        rig.scheduler.advance(ACK_DELAY_MS + RESET_DELAY_MS);
        assert_eq!(rig.acked.get(), 1);
        assert_eq!(rig.resets.get(), 1);
    }

    #[test]
    fn confirmation_reverts_after_the_second_delay_not_the_first() {
        assert!(ACK_DELAY_MS < RESET_DELAY_MS);
        let after_ack = step(
            step(SubmissionPhase::Idle, SequencerAction::Submit),
            SequencerAction::Acknowledge,
        );
        // Still showing the confirmation until the reset timer fires.
        assert_eq!(after_ack, SubmissionPhase::Submitted);
    }
}
