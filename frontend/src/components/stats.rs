use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::config::{COUNTER_DURATION_MS, COUNTER_STAGGER_MS, COUNTER_VISIBLE_RATIO};
use crate::dom::Observer;
use crate::error::PageError;
use crate::motion::counter::StatCounter;
use crate::motion::easing::{progress, stagger};
use crate::motion::frame_loop::FrameLoop;

#[derive(Clone, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub stats: Vec<Stat>,
}

/// Text currently shown for each statistic.
#[derive(Clone, PartialEq)]
struct CounterTexts(Vec<String>);

impl Reducible for CounterTexts {
    type Action = (usize, String);

    fn reduce(self: Rc<Self>, (index, text): Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if let Some(slot) = next.0.get_mut(index) {
            *slot = text;
        }
        next.into()
    }
}

#[derive(Default)]
struct Running {
    timers: Vec<Timeout>,
    loops: Vec<FrameLoop>,
}

/// Statistics that count up from zero the first time the grid is half
/// on screen.
#[function_component(StatsGrid)]
pub fn stats_grid(props: &StatsGridProps) -> Html {
    let texts = {
        let initial = props.stats.iter().map(|stat| stat.value.to_string()).collect();
        use_reducer(move || CounterTexts(initial))
    };
    let running = use_mut_ref(Running::default);
    let grid = use_node_ref();

    {
        let dispatcher = texts.dispatcher();
        let stats = props.stats.clone();
        let grid = grid.clone();
        let running = running.clone();

        use_effect_with_deps(
            move |_| {
                let observer = grid.cast::<Element>().and_then(|grid| {
                    watch_grid(&grid, stats, dispatcher, running.clone())
                        .map_err(|e| warn!("Statistic counters disabled: {}", e))
                        .ok()
                });
                move || {
                    drop(observer);
                    let mut running = running.borrow_mut();
                    running.timers.clear();
                    running.loops.clear();
                }
            },
            (),
        );
    }

    html! {
        <div class="stats-grid" ref={grid}>
            { for props.stats.iter().zip(texts.0.iter()).map(|(stat, text)| html! {
                <div class="stat">
                    <span class="stat-number">{ text.clone() }</span>
                    <span class="stat-label">{ stat.label }</span>
                </div>
            }) }
        </div>
    }
}

fn watch_grid(
    grid: &Element,
    stats: Vec<Stat>,
    dispatcher: UseReducerDispatcher<CounterTexts>,
    running: Rc<RefCell<Running>>,
) -> Result<Observer, PageError> {
    let observer = Observer::new(COUNTER_VISIBLE_RATIO, None, move |entries, observer| {
        let Some(entry) = entries.iter().find(|entry| entry.is_intersecting()) else {
            return;
        };
        observer.unobserve(&entry.target());
        debug!("Stats grid visible, counting {} statistics", stats.len());
        start_counters(&stats, &dispatcher, &running);
    })?;
    observer.observe(grid);
    Ok(observer)
}

fn start_counters(
    stats: &[Stat],
    dispatcher: &UseReducerDispatcher<CounterTexts>,
    running: &Rc<RefCell<Running>>,
) {
    for (index, stat) in stats.iter().enumerate() {
        let Some(counter) = StatCounter::parse(stat.value) else {
            continue;
        };
        let dispatcher = dispatcher.clone();
        let loops = running.clone();
        let timeout = Timeout::new(stagger(index, COUNTER_STAGGER_MS), move || {
            let frame_loop = count_up(index, counter, dispatcher);
            loops.borrow_mut().loops.push(frame_loop);
        });
        running.borrow_mut().timers.push(timeout);
    }
}

fn count_up(
    index: usize,
    counter: StatCounter,
    dispatcher: UseReducerDispatcher<CounterTexts>,
) -> FrameLoop {
    let mut started_at = None;
    FrameLoop::start(move |timestamp| {
        let started = *started_at.get_or_insert(timestamp);
        let t = progress(timestamp - started, COUNTER_DURATION_MS);
        dispatcher.dispatch((index, counter.render(t)));
        t < 1.0
    })
}
