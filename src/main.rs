use classic_structures::graph::Position;
use classic_structures::*;

/// Holds the current state of one structure and the log of messages,
/// replacing the state with the one each operation returns.
struct Session<S> {
    state: S,
    log: Vec<Message>,
}

impl<S> Session<S> {
    fn new(state: S) -> Self {
        Session { state, log: vec![] }
    }

    fn apply<R>(&mut self, op: impl FnOnce(&S) -> Outcome<S, R>) -> R {
        let (state, output, message) = op(&self.state).into_parts();
        self.state = state;
        self.log.push(message);
        output
    }

    fn print(&self, title: &str) {
        println!("== {}", title);
        for message in &self.log {
            println!("[{:?}] {}", message.kind, message.text);
        }
    }
}

// an example:
fn main() {
    let mut array = Session::new(Array::new());
    array.apply(|a| a.insert_at("x", 0));
    array.apply(|a| a.insert_at(7, 1));
    array.apply(|a| a.remove_at(5));
    array.apply(|a| a.view_at(1));
    array.print("array");

    let mut list = Session::new(LinkedList::new());
    for word in "b a".split_whitespace() {
        let value: Value = word.parse().unwrap_or_else(|never| match never {});
        list.apply(|l| l.prepend(value));
    }
    list.apply(|l| l.search("b"));
    list.print("linked list");

    let mut heap = Session::new(Heap::new());
    for x in [5., 3., 8., 1.] {
        heap.apply(|h| h.insert(x));
    }
    heap.apply(Heap::extract);
    heap.apply(Heap::toggle_mode);
    heap.apply(Heap::extract);
    heap.print("heap");

    let mut bst = Session::new(Bst::new());
    for x in [50., 30., 70., 30.] {
        bst.apply(|t| t.insert(x));
    }
    bst.apply(|t| t.remove(50.));
    bst.print("BST");

    let mut graph = Session::new(Graph::new());
    graph.apply(|g| g.add_node("A", Position::new(100., 100.)));
    graph.apply(|g| g.add_node("B", Position::new(200., 150.)));
    graph.apply(|g| g.add_edge("A", "B", false));
    graph.apply(|g| g.add_edge("B", "A", false));
    graph.apply(|g| g.remove_node("A"));
    graph.print("graph");
}
