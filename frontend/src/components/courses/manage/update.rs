//! Update function for the manage-course page.
//!
//! Follows the same Elm-style contract as the other components: mutate the
//! state for `msg`, start any async work through `ctx.link()`, and return
//! whether the view must re-render.

use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::notify::show_toast;

use super::messages::Msg;
use super::state::ManageCoursePage;

pub fn update(page: &mut ManageCoursePage, ctx: &Context<ManageCoursePage>, msg: Msg) -> bool {
    match msg {
        Msg::FieldChanged { name, value } => {
            if !page.handle_field_change(&name, value) {
                log!(format!("ignoring change to unknown course field '{}'", name));
                return false;
            }
            true
        }
        Msg::Submit => {
            let Some(course) = page.begin_save() else {
                return true;
            };

            let save = ctx.props().store.save_course(course);
            let link = ctx.link().clone();
            spawn_local(async move {
                match save.await {
                    Ok(()) => link.send_message(Msg::SaveSucceeded),
                    Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                }
            });
            true
        }
        Msg::SaveSucceeded => {
            let (message, route) = page.save_succeeded();
            show_toast(message);
            ctx.props().on_navigate.emit(route);
            false
        }
        Msg::SaveFailed(message) => {
            gloo_console::error!(format!("saving course failed: {}", message));
            page.save_failed(message);
            true
        }
    }
}
