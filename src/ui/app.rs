use crate::inventory::{
    DraftError, InventoryIntent, InventoryReducer, InventoryState, Operation, RemoteRequest,
};
use crate::pet::{Pet, PetField};
use crate::ui::mvi::Reducer;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Search,
    List,
    Form,
}

impl Focus {
    fn next(self) -> Focus {
        match self {
            Focus::Search => Focus::List,
            Focus::List => Focus::Form,
            Focus::Form => Focus::Search,
        }
    }

    fn prev(self) -> Focus {
        match self {
            Focus::Search => Focus::Form,
            Focus::List => Focus::Search,
            Focus::Form => Focus::List,
        }
    }
}

pub type RequestSender = mpsc::Sender<RemoteRequest>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    title: String,
    /// Inventory view-model state (MVI pattern).
    inventory: InventoryState,
    /// Index into the filtered list.
    selected: usize,
    form_field: PetField,
    /// A request is outstanding; no other may be sent until it resolves.
    busy: bool,
    request_sender: Option<RequestSender>,
}

impl App {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::List,
            title: title.into(),
            inventory: InventoryState::default(),
            selected: 0,
            form_field: PetField::Name,
            busy: false,
            request_sender: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = if forward {
            self.focus.next()
        } else {
            self.focus.prev()
        };
    }

    pub fn inventory(&self) -> &InventoryState {
        &self.inventory
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_pet(&self) -> Option<&Pet> {
        self.inventory.visible().get(self.selected).copied()
    }

    pub fn form_field(&self) -> PetField {
        self.form_field
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_request_sender(&mut self, sender: RequestSender) {
        self.request_sender = Some(sender);
    }

    /// Apply an intent to the inventory state.
    pub fn dispatch(&mut self, intent: InventoryIntent) {
        dispatch_mvi!(self, inventory, InventoryReducer, intent);
        self.clamp_selection();
    }

    /// A remote request finished; `intent` carries its outcome.
    pub fn on_remote(&mut self, intent: InventoryIntent) {
        self.busy = false;
        self.dispatch(intent);
    }

    /// Issue the start-up fetch.
    pub fn load(&mut self) {
        self.send_request(RemoteRequest::FetchAll);
    }

    /// Discard local state and fetch again.
    pub fn reload(&mut self) {
        if self.busy {
            self.refuse(Operation::FetchAll);
            return;
        }
        self.dispatch(InventoryIntent::FetchStarted);
        self.form_field = PetField::Name;
        self.send_request(RemoteRequest::FetchAll);
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.inventory.visible().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected.min(len - 1);
        self.selected = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    pub fn move_field(&mut self, forward: bool) {
        self.form_field = if forward {
            self.form_field.next()
        } else {
            self.form_field.prev()
        };
    }

    /// Type a character into whatever has focus.
    pub fn type_char(&mut self, ch: char) {
        match self.focus {
            Focus::Search => {
                let mut text = self.inventory.query.clone();
                text.push(ch);
                self.dispatch(InventoryIntent::SetQuery { text });
            }
            Focus::Form => {
                let field = self.form_field;
                let mut value = self.inventory.form.input(field);
                value.push(ch);
                self.dispatch(InventoryIntent::DraftChanged { field, value });
            }
            Focus::List => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::Search => {
                let mut text = self.inventory.query.clone();
                text.pop();
                self.dispatch(InventoryIntent::SetQuery { text });
            }
            Focus::Form => {
                let field = self.form_field;
                let mut value = self.inventory.form.input(field);
                value.pop();
                self.dispatch(InventoryIntent::DraftChanged { field, value });
            }
            Focus::List => {}
        }
    }

    /// Load the selected pet into the form.
    pub fn edit_selected(&mut self) {
        let Some(id) = self.selected_pet().map(|pet| pet.id) else {
            return;
        };
        self.dispatch(InventoryIntent::BeginEdit { id });
        self.form_field = PetField::Name;
        self.focus = Focus::Form;
    }

    /// Leave edit mode with an empty form.
    pub fn new_pet(&mut self) {
        self.dispatch(InventoryIntent::CancelEdit);
        self.form_field = PetField::Name;
        self.focus = Focus::Form;
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch(InventoryIntent::CancelEdit);
        self.focus = Focus::List;
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_pet().map(|pet| pet.id) else {
            return;
        };
        self.send_request(RemoteRequest::Delete { id });
    }

    pub fn submit(&mut self) {
        match self.inventory.submit_request() {
            Ok(request) => self.send_request(request),
            Err(DraftError::MissingFields(missing)) => {
                if let Some(first) = missing.first() {
                    self.form_field = *first;
                }
                self.dispatch(InventoryIntent::Rejected { missing });
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch(InventoryIntent::DismissNotice);
    }

    fn send_request(&mut self, request: RemoteRequest) {
        let operation = request.operation();
        if self.busy {
            self.refuse(operation);
            return;
        }
        let Some(sender) = &self.request_sender else {
            self.dispatch(operation.failed("client not connected".to_string()));
            return;
        };

        match sender.try_send(request) {
            Ok(()) => self.busy = true,
            Err(err) => {
                tracing::error!(operation = %operation, error = %err, "Request send failed");
                self.dispatch(operation.failed(format!("request send failed: {}", err)));
            }
        }
    }

    fn refuse(&mut self, operation: Operation) {
        tracing::debug!(operation = %operation, "Request refused while busy");
        self.dispatch(InventoryIntent::Refused { operation });
    }

    fn clamp_selection(&mut self) {
        let len = self.inventory.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
