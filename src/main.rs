use labeled_graph::{generate_dot_graph, is_complete, is_empty, Graph};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "graph.dot".to_string());

    let mut graph = Graph::new();
    println!("Is Empty: {}", is_empty(&graph));

    for node in ["A", "B", "C", "D"] {
        graph.add_node(node);
    }
    println!("Is Empty: {}", is_empty(&graph));

    for from in ["A", "B", "C", "D"] {
        for to in ["A", "B", "C", "D"] {
            if from != to {
                graph.add_edge(&from, &to)?;
            }
        }
    }
    println!("Is Complete: {}", is_complete(&graph));

    graph.remove_edge(&"A", &"B");
    println!("Is Complete: {}", is_complete(&graph));

    println!("Graph:\n{}", graph);

    generate_dot_graph(&graph, &path)?;
    Ok(())
}
