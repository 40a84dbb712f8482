use leptos::prelude::*;
use seva_kendra::listing::{ListState, ModalState};

use super::record_dialog::sync_dialog;

#[component]
pub fn ConfirmDeleteDialog(state: RwSignal<ListState>, on_confirm: Callback<()>) -> impl IntoView {
    let noun = state.with_untracked(|s| s.schema.noun.to_lowercase());
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let open = Memo::new(move |_| state.with(|s| matches!(s.modal, ModalState::ConfirmDelete(_))));
    sync_dialog(dialog_ref, open);

    let busy = move || state.with(|s| s.submitting);
    let cancel = move || {
        if open.get_untracked() && !state.with_untracked(|s| s.submitting) {
            state.update(ListState::close_modal);
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| cancel()>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Confirm Delete"</h3>
                <p class="py-4">
                    {format!("Are you sure you want to delete this {}? This action cannot be undone.", noun)}
                </p>
                <div class="modal-action">
                    <button class="btn btn-ghost" on:click=move |_| cancel()>"Cancel"</button>
                    <button class="btn btn-error" disabled=busy on:click=move |_| on_confirm.run(())>
                        {move || if busy() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </dialog>
    }
}
