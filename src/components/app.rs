use super::{
    HostContext, boats_tab::BoatsTab, header::Header, market_tab::MarketTab,
    next_action_bar::NextActionBar, progress_overlay::ProgressOverlay,
    progression_panel::ProgressionPanel, receipt_modal::ReceiptModal, run_tab::RunTab,
    tab_bar::TabBar, toast_stack::ToastStack,
};
use crate::config::PanelConfig;
use crate::host::{self, HostAction};
use crate::model::InboundMessage;
use crate::state::panel::Deferred;
use crate::state::{KeyCommand, PanelAction, PanelState, PanelView, Tab, keymap, react};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, KeyboardEvent, MessageEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: PanelConfig,
}

/// Apply an action later. Timers are never cancelled.
fn schedule(panel: &UseReducerHandle<PanelState>, deferred: Deferred) {
    let Deferred { after_ms, action } = deferred;
    let Some(window) = web_sys::window() else {
        return;
    };
    let panel = panel.clone();
    let cb = Closure::once_into_js(move || panel.dispatch(action));
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), after_ms)
    {
        log::warn!("could not schedule timer: {:?}", e);
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let panel = use_reducer(PanelState::default);
    let next_toast_id = use_mut_ref(|| 0u64);
    // Latest visibility and next action, read by the window key handler.
    let keys_ref = use_mut_ref(|| (false, None::<HostAction>));

    let send = use_callback(props.config.clone(), |action: HostAction, config| {
        log::debug!("-> {}", action.endpoint());
        host::send(config, action)
    });

    let view = PanelView::build(&panel);
    {
        let keys_ref = keys_ref.clone();
        let keys = (view.visible, view.next_action.command.clone());
        use_effect_with(keys, move |keys| {
            *keys_ref.borrow_mut() = keys.clone();
            || ()
        });
    }

    // Host messages + keyboard, registered once; also asks the host for a first sync.
    {
        let panel = panel.clone();
        let send = send.clone();
        let config = props.config.clone();
        let keys_ref = keys_ref.clone();
        let next_toast_id = next_toast_id.clone();
        use_effect_with((), move |_| {
            let message_cb = {
                let panel = panel.clone();
                Closure::wrap(Box::new(move |e: MessageEvent| {
                    let Some(msg) = host::decode_message(&e) else {
                        return;
                    };
                    if !matches!(msg, InboundMessage::Sync { .. }) {
                        log::debug!("<- {:?}", msg);
                    }
                    let reaction = react(msg, &config, &mut *next_toast_id.borrow_mut());
                    panel.dispatch(reaction.action);
                    for deferred in reaction.deferred {
                        schedule(&panel, deferred);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let keydown_cb = {
                let panel = panel.clone();
                let send = send.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let (visible, next) = keys_ref.borrow().clone();
                    let typing = e
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .is_some_and(|el| keymap::is_text_entry(&el.tag_name()));
                    match keymap::resolve(&e.key(), visible, typing) {
                        Some(KeyCommand::Close) => send.emit(HostAction::Close),
                        Some(KeyCommand::SelectTab(tab)) => {
                            panel.dispatch(PanelAction::SelectTab { tab, by_user: true })
                        }
                        Some(KeyCommand::RunNextAction) => {
                            if let Some(action) = next {
                                send.emit(action);
                            }
                        }
                        None => {}
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let window = web_sys::window();
            if let Some(window) = &window {
                window
                    .add_event_listener_with_callback("message", message_cb.as_ref().unchecked_ref())
                    .ok();
                window
                    .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                    .ok();
            }
            send.emit(HostAction::RequestSync);
            // Cleanup
            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "message",
                        message_cb.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let select_tab = {
        let panel = panel.clone();
        Callback::from(move |tab: Tab| panel.dispatch(PanelAction::SelectTab { tab, by_user: true }))
    };
    let close_receipt = {
        let panel = panel.clone();
        Callback::from(move |_| panel.dispatch(PanelAction::CloseReceipt))
    };

    let content = match view.active_tab {
        Tab::Run => html! { <RunTab view={view.run.clone()} /> },
        Tab::Boats => html! { <BoatsTab view={view.boats.clone()} /> },
        Tab::Market => html! { <MarketTab view={view.market.clone()} /> },
    };
    let body = if view.visible {
        html! {
            <div style="position:fixed; top:50%; left:50%; transform:translate(-50%, -50%); width:min(560px, 94vw); max-height:90vh; overflow-y:auto; background:#0d1117; border:2px solid #30363d; border-radius:14px; padding:16px; display:flex; flex-direction:column; gap:12px; color:#c9d1d9; font-family:sans-serif;">
                <Header title={view.title.clone()} />
                <ProgressionPanel view={view.progression.clone()} />
                <TabBar active={view.active_tab} on_select={select_tab} />
                { content }
                <NextActionBar next={view.next_action.clone()} />
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <ContextProvider<HostContext> context={HostContext { send }}>
            <div id="root">
                { body }
                <ReceiptModal view={view.receipt.clone()} on_close={close_receipt} />
                <ProgressOverlay view={view.progress.clone()} />
                <ToastStack toasts={view.toasts.clone()} />
            </div>
        </ContextProvider<HostContext>>
    }
}
