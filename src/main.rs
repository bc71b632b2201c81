//! Walkthrough of the supersede contract
//!
//! Simulates the list panel of an administrative UI: the user queries for one
//! filter set, changes their mind before the response arrives, and the
//! responses then settle out of order. Only the latest generation's results
//! ever reach the displayed list.

use request_tracker::delivery::callback::Request;
use request_tracker::session::ViewSession;
use request_tracker::status::RequestStatus;
use std::cell::RefCell;
use std::rc::Rc;

fn main() {
    let displayed: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let mut session = ViewSession::new();

    // Settlement handler of the list panel: completed payloads replace the
    // displayed rows, everything else leaves them alone
    let panel = |displayed: &Rc<RefCell<Vec<String>>>| {
        let displayed = displayed.clone();
        move |status: RequestStatus<Vec<String>, String>| match status {
            RequestStatus::Completed(rows) => *displayed.borrow_mut() = rows,
            RequestStatus::Failed(err) => println!("panel error: {err}"),
            RequestStatus::Pending | RequestStatus::Cancelled => {}
        }
    };

    // The user filters for group 5
    let generation = session.supersede();
    println!("generation {generation}: querying group=5");
    let (mut slow_port, slow_handle) = Request::new(panel(&displayed)).split();
    let slow_id = session.track(slow_handle);

    // Before that query resolves, the user switches to group 7
    let generation = session.supersede();
    println!("generation {generation}: querying group=7");
    let (mut fast_port, fast_handle) = Request::new(panel(&displayed)).split();
    let fast_id = session.track(fast_handle);

    // The fresh response arrives first...
    fast_port.settle(Ok(vec![
        "Ivanov (tourist, group 7)".to_owned(),
        "Petrov (trainer, group 7)".to_owned(),
    ]));
    session.complete(fast_id);
    println!("displayed after fresh response: {:?}", displayed.borrow());

    // ...and the stale one limps in afterwards, to no effect
    slow_port.settle(Ok(vec!["Sidorov (tourist, group 5)".to_owned()]));
    session.complete(slow_id);
    println!("displayed after stale response: {:?}", displayed.borrow());

    assert_eq!(displayed.borrow().len(), 2);
    println!("stale response was discarded, {} requests in flight", session.in_flight());
}
