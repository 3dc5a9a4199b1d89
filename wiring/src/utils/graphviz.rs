use std::fmt::Write;

use crate::*;

fn get_type_name(i: &TypeInfo) -> String {
    let name = i.type_name.strip_prefix("dyn ").unwrap_or(i.type_name);
    // Additional bounds of trait objects (`dyn A + Send`) are not part of the name
    let iend = [name.find('<'), name.find(" + ")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(name.len());
    let icol = name[0..iend].rfind("::").map_or(0, |i| i + 2);

    format!("\"{}\"", &name[icol..iend])
}

/// Renders the bindings of a container and the dependencies of the given
/// consumers as a DOT digraph
pub fn render(container: &dyn Container, consumers: &[&dyn Dependent]) -> String {
    let mut s = String::new();

    writeln!(
        s,
        indoc::indoc!(
            r#"
            digraph Container {{
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
            "#
        )
    )
    .unwrap();

    let mut bindings: Vec<_> = container.bindings().collect();
    bindings.sort_by_key(|b| b.interface().type_name);

    for b in &bindings {
        let iface = b.interface();

        match b.implementation() {
            Some(inst) => writeln!(
                s,
                "    {} -> {} [label=\"{}\", style=dashed, arrowhead=onormal]",
                get_type_name(&inst),
                get_type_name(&iface),
                b.strategy()
            )
            .unwrap(),
            None => writeln!(
                s,
                "    {} [label=\"{}\\n({})\", fillcolor=lightgrey]",
                get_type_name(&iface),
                get_type_name(&iface).trim_matches('"'),
                b.strategy()
            )
            .unwrap(),
        }
    }

    let mut consumers: Vec<_> = consumers.iter().collect();
    consumers.sort_by_key(|c| c.type_info().type_name);

    for c in consumers {
        let inst = c.type_info();

        let mut deps = c.dependencies();
        deps.sort_by_key(|d| d.type_name);

        for dep in &deps {
            let bound = bindings.iter().any(|b| b.interface().id == dep.id);
            writeln!(
                s,
                "    {} -> {} [{}arrowhead=vee]",
                get_type_name(&inst),
                get_type_name(dep),
                if bound { "" } else { "label=\"unbound\", style=dotted, " }
            )
            .unwrap();
        }
    }

    writeln!(s, "}}").unwrap();
    s
}
