use crate::network::{Network, TerminalId};

/// One step out of a terminal through the adjacency index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub destination: TerminalId,
    pub travel_time: u32,
}

/// Trait for providing adjacency and wait times to the searches
pub trait ShuttleGraph {
    /// Every terminal, in the order searches should reset them
    fn terminal_ids(&self) -> Vec<TerminalId>;
    fn wait_time(&self, id: TerminalId) -> Option<u32>;
    /// Links out of a terminal; empty for unknown terminals
    fn links(&self, id: TerminalId) -> Vec<Link>;
}

impl ShuttleGraph for Network {
    fn terminal_ids(&self) -> Vec<TerminalId> {
        self.terminals().map(|(id, _)| id).collect()
    }

    fn wait_time(&self, id: TerminalId) -> Option<u32> {
        self.terminal(id).map(|terminal| terminal.wait_time())
    }

    fn links(&self, id: TerminalId) -> Vec<Link> {
        self.adjacent(id)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(destination, shuttle)| {
                self.shuttle(shuttle).map(|s| Link {
                    destination,
                    travel_time: s.travel_time(),
                })
            })
            .collect()
    }
}
