// Account lifecycle: registration, login, dashboard, bank-account
// verification (a national-ID equality simulation), and deletion.

pub mod handlers;
