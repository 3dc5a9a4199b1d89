use wiring::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

trait A: Send + Sync {}
trait B: Send + Sync {}
trait C: Send + Sync {}
trait D: Send + Sync {}

#[derive(Default)]
struct AImpl;
impl A for AImpl {}

#[derive(Default)]
struct BImpl;
impl B for BImpl {}

#[container]
struct Graph {
    c: Factory<dyn C>,
    b: Shared<dyn B, BImpl>,
    a: Owner<dyn A, AImpl>,
}

#[derive(Default, Dependent)]
struct Consumer {
    d: Depends<dyn D>,
    a: Depends<dyn A>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_graphviz_render() {
    let container = Graph::new();
    let consumer = Consumer::default();

    pretty_assertions::assert_eq!(
        wiring::utils::graphviz::render(&container, &[&consumer]),
        indoc::indoc!(
            r#"
            digraph Container {
                rankdir=LR;
                fontsize=8;
                fontname="Roboto";

                node [
                    shape=box,
                    style=filled,
                    fillcolor=white,
                    fontname="Roboto",
                    fontsize=8
                ];

                edge [
                    fontname="Roboto",
                    fontsize=8
                ];

                "AImpl" -> "A" [label="owner", style=dashed, arrowhead=onormal]
                "BImpl" -> "B" [label="shared", style=dashed, arrowhead=onormal]
                "C" [label="C\n(factory)", fillcolor=lightgrey]
                "Consumer" -> "A" [arrowhead=vee]
                "Consumer" -> "D" [label="unbound", style=dotted, arrowhead=vee]
            }
            "#
        ),
    );
}

#[test]
fn test_graphviz_render_empty() {
    #[container]
    struct Empty {}

    let rendered = wiring::utils::graphviz::render(&Empty::new(), &[]);

    assert!(rendered.starts_with("digraph Container {\n"));
    assert!(rendered.ends_with("];\n\n}\n"));
    assert!(!rendered.contains("->"));
}

#[test]
fn test_graphviz_render_multi_bound_interface() {
    #[container]
    struct Bounded {
        b: Shared<dyn B + Send, BImpl>,
        a: Owner<dyn A + Send + Sync, AImpl>,
    }

    let rendered = wiring::utils::graphviz::render(&Bounded::new(), &[]);

    assert!(rendered.contains(
        "    \"BImpl\" -> \"B\" [label=\"shared\", style=dashed, arrowhead=onormal]\n"
    ));
    assert!(rendered.contains(
        "    \"AImpl\" -> \"A\" [label=\"owner\", style=dashed, arrowhead=onormal]\n"
    ));
    assert!(!rendered.contains("\"Send\""));
}
