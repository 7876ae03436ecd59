use fleet_model::Taint;

/// Human readable summary of a cluster's taints for status conditions.
pub fn taints_message(taints: &[Taint]) -> String {
    if taints.is_empty() {
        return "cluster now does not have taints".to_string();
    }

    let rendered: Vec<String> = taints.iter().map(render).collect();
    format!("cluster now has taints([{}])", rendered.join(","))
}

fn render(taint: &Taint) -> String {
    if taint.value.is_empty() {
        format!("{{Key:{},Effect:{}}}", taint.key, taint.effect)
    } else {
        format!(
            "{{Key:{},Value:{},Effect:{}}}",
            taint.key, taint.value, taint.effect
        )
    }
}
