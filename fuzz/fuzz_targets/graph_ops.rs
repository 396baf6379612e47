#![no_main]

use digraph::DirectedGraph;
use libfuzzer_sys::fuzz_target;

// Each op is three bytes: opcode, then two node values folded into a small domain
fuzz_target!(|data: &[u8]| {
    let mut graph: DirectedGraph<u8> = DirectedGraph::new();

    for op in data.chunks_exact(3) {
        let (a, b) = (op[1] % 16, op[2] % 16);
        match op[0] % 6 {
            0 => {
                let _ = graph.add_node(a);
            }
            1 => {
                let _ = graph.remove_node(&a);
            }
            2 => {
                let _ = graph.add_edge(&a, &b);
            }
            3 => {
                let _ = graph.remove_edge(&a, &b);
            }
            4 => {
                let copy = graph.clone();
                assert!(copy.edges().eq(graph.edges()));
                assert_eq!(copy.edge_count(), graph.edge_count());
            }
            _ => {
                let mut target: DirectedGraph<u8> = DirectedGraph::new();
                target.assign(&graph).unwrap();
                graph.swap(&mut target);
            }
        }

        let mut counted = 0;
        for from in &graph {
            for to in &graph {
                if graph.has_edge(from, to).unwrap() {
                    counted += 1;
                }
            }
        }
        assert_eq!(counted, graph.edge_count());
        assert_eq!(graph.edges().count(), graph.edge_count());
    }
});
