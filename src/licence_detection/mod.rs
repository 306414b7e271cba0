/// Licence detection domain - pure business logic
///
/// Value objects (`domain`), the licence policy (`policies`) and the
/// stateless domain services (`services`). Nothing in here talks to the
/// outside world except the licence-file locator, which only lists a
/// module directory.
pub mod domain;
pub mod policies;
pub mod services;
