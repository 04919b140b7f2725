mod campaign;
mod role;
mod session_record;
mod severity;
mod training;
