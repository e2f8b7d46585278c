//! Generation counters so that only the newest response of a request class
//! is applied to the view.

/// Identifies one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
	latest: u64,
}

impl RequestSeq {
	/// Issue a new ticket, superseding every earlier one.
	pub fn issue(&mut self) -> Ticket {
		self.latest += 1;
		Ticket(self.latest)
	}

	pub fn is_latest(&self, ticket: Ticket) -> bool {
		ticket.0 == self.latest
	}

	/// Invalidate outstanding tickets without issuing a new request.
	pub fn cancel(&mut self) {
		self.latest += 1;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_newest_ticket_is_current() {
		let mut seq = RequestSeq::default();
		let first = seq.issue();
		assert!(seq.is_latest(first));
		let second = seq.issue();
		assert!(!seq.is_latest(first));
		assert!(seq.is_latest(second));
	}

	#[test]
	fn cancel_invalidates_outstanding() {
		let mut seq = RequestSeq::default();
		let ticket = seq.issue();
		seq.cancel();
		assert!(!seq.is_latest(ticket));
		let next = seq.issue();
		assert!(seq.is_latest(next));
	}
}
