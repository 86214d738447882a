use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::chat::sequencer::{ChatSequencer, ChatView, SequencerState, Trigger};
use crate::chat::transcript::{Author, MessageDescriptor};
use crate::config::{CHAT_HERO_SETTLE_MS, CHAT_HERO_VISIBLE_RATIO, CHAT_PAGE_SETTLE_MS};
use crate::dom::{self, Observer};
use crate::error::PageError;

type Timers = Rc<RefCell<Vec<Timeout>>>;

#[derive(Properties, PartialEq)]
pub struct ChatDemoProps {
    pub messages: Rc<Vec<MessageDescriptor>>,
    /// Section whose visibility starts the replay.
    pub host: NodeRef,
}

/// Hero chat that plays its transcript once, either shortly after the window
/// has loaded or when the hero is half on screen, whichever comes first.
#[function_component(ChatDemo)]
pub fn chat_demo(props: &ChatDemoProps) -> Html {
    let view = {
        let len = props.messages.len();
        use_reducer(move || ChatView::new(len))
    };
    let sequencer = use_mut_ref(ChatSequencer::default);
    let timers: Timers = use_mut_ref(Vec::new);
    let container = use_node_ref();

    {
        let dispatcher = view.dispatcher();
        let messages = props.messages.clone();
        let host = props.host.clone();
        let container = container.clone();
        let timers = timers.clone();

        use_effect_with_deps(
            move |_| {
                let triggers = if container.get().is_none() || messages.is_empty() {
                    debug!("Chat demo has nothing to play");
                    None
                } else {
                    let start: Rc<dyn Fn(Trigger)> = {
                        let sequencer = sequencer.clone();
                        let timers = timers.clone();
                        Rc::new(move |trigger: Trigger| {
                            start_run(trigger, &messages, &sequencer, &timers, &dispatcher)
                        })
                    };

                    let on_load = {
                        let start = start.clone();
                        let settle_timers = timers.clone();
                        dom::on_page_load(move || {
                            settle_timers.borrow_mut().push(Timeout::new(CHAT_PAGE_SETTLE_MS, move || {
                                start(Trigger::PageSettled)
                            }));
                        })
                        .map_err(|e| warn!("Chat demo load trigger disabled: {}", e))
                        .ok()
                        .flatten()
                    };

                    let observer = host.cast::<Element>().and_then(|host| {
                        watch_host(&host, start, sequencer, timers.clone())
                            .map_err(|e| warn!("Chat demo visibility trigger disabled: {}", e))
                            .ok()
                    });
                    Some((on_load, observer))
                };

                move || {
                    drop(triggers);
                    timers.borrow_mut().clear();
                }
            },
            (),
        );
    }

    html! {
        <div class="chat-window">
            <div class="chat-messages" id="chatMessages" ref={container}>
                { for props.messages.iter().enumerate().map(|(index, message)| render_message(index, message, &view)) }
            </div>
            <div class={classes!("chat-typing", view.typing.then(|| "show"))} id="chatTyping">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    }
}

/// Schedules every transition of the run, unless one already started.
fn start_run(
    trigger: Trigger,
    messages: &[MessageDescriptor],
    sequencer: &Rc<RefCell<ChatSequencer>>,
    timers: &Timers,
    dispatcher: &UseReducerDispatcher<ChatView>,
) {
    let Some(table) = sequencer.borrow_mut().start(messages) else {
        debug!("Chat demo already started, ignoring {:?}", trigger);
        return;
    };
    info!("Starting chat demo on {:?} with {} transitions", trigger, table.len());

    let mut timers = timers.borrow_mut();
    for entry in table {
        let dispatcher = dispatcher.clone();
        let sequencer = sequencer.clone();
        timers.push(Timeout::new(entry.at_ms, move || {
            dispatcher.dispatch(entry.transition);
            let mut sequencer = sequencer.borrow_mut();
            sequencer.transition_fired();
            if sequencer.state() == SequencerState::Finished {
                info!("Chat demo finished");
            }
        }));
    }
}

fn watch_host(
    host: &Element,
    start: Rc<dyn Fn(Trigger)>,
    sequencer: Rc<RefCell<ChatSequencer>>,
    timers: Timers,
) -> Result<Observer, PageError> {
    let observer = Observer::new(CHAT_HERO_VISIBLE_RATIO, None, move |entries, _| {
        let half_visible = entries
            .iter()
            .any(|entry| entry.is_intersecting() && entry.intersection_ratio() >= CHAT_HERO_VISIBLE_RATIO);
        if !half_visible || sequencer.borrow().has_started() {
            return;
        }
        let start = start.clone();
        timers.borrow_mut().push(Timeout::new(CHAT_HERO_SETTLE_MS, move || {
            start(Trigger::HeroVisible)
        }));
    })?;
    observer.observe(host);
    Ok(observer)
}

fn render_message(index: usize, message: &MessageDescriptor, view: &ChatView) -> Html {
    let side = match message.author {
        Author::Client => "message-client",
        Author::Developer => "message-developer",
    };
    let visible = view.visible.get(index).copied().unwrap_or(false);
    let uploaded = view.uploaded.get(index).copied().unwrap_or(false);

    html! {
        <div class={classes!(
            "message",
            "fade-in-message",
            side,
            message.is_file().then(|| "message-file"),
            visible.then(|| "visible"),
            uploaded.then(|| "upload-complete")
        )}>
            {
                if let Some(file) = &message.file {
                    html! {
                        <div class="message-attachment">
                            <span class="file-name">{ file.name.clone() }</span>
                            { for file.size.clone().map(|size| html! { <span class="file-size">{ size }</span> }) }
                            <div class="upload-progress"><div class="upload-bar"></div></div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <p class="message-text">{ message.content.clone() }</p>
            { for message.time.clone().map(|time| html! { <span class="message-time">{ time }</span> }) }
        </div>
    }
}
