pub(super) mod ballot_controller;
pub(super) mod dialog_controller;
