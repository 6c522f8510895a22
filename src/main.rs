use std::process;

use clap::{App, Arg};
use log::info;

use digraph::Digraph;

fn main() {
    pretty_env_logger::init();

    let matches = App::new("digraph")
        .version("1.0")
        .about("Loads a directed graph from an edge-list file and prints it")
        .arg(Arg::with_name("input")
             .value_name("FILE")
             .help("An edge-list file: vertex count, edge count, then <u> <v> pairs")
             .required(true)
             .index(1))
        .arg(Arg::with_name("reverse")
             .short("r")
             .long("reverse")
             .help("Also print the reverse of the graph"))
        .get_matches();

    let path = matches.value_of("input").unwrap();

    let graph = match Digraph::from_file(path) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    info!(
        "loaded {} vertices, {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        path
    );

    print!("{}", graph);

    if matches.is_present("reverse") {
        print!("{}", graph.reverse());
    }
}
