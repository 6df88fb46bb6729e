use bayes_net_core::{
    ArraySet, Assignment, BayesianNetwork, Cpt, NamedVariable, NetworkConfig, NetworkError, TableCpt, Value, VarRef,
};
use test_log::test;

type Var = VarRef<NamedVariable>;

const TRUE: Value = Value::Bool(true);
const FALSE: Value = Value::Bool(false);

fn assign(bindings: &[(&Var, Value)]) -> Assignment<NamedVariable> {
    bindings.iter().map(|(v, value)| ((*v).clone(), value.clone())).collect()
}

/// A (no parents) -> B, both boolean.
fn a_to_b() -> (BayesianNetwork<NamedVariable>, Var, Var) {
    let a = VarRef::new(NamedVariable::boolean("A"));
    let b = VarRef::new(NamedVariable::boolean("B"));
    let mut network = BayesianNetwork::new();
    network.add(a.clone());
    network.add(b.clone());

    let mut a_prior = TableCpt::new(a.clone());
    let none = Assignment::new();
    a_prior.set(TRUE, &none, 0.6).unwrap();
    a_prior.set(FALSE, &none, 0.4).unwrap();
    network.connect(&a, &[], a_prior).unwrap();

    let mut b_given_a = TableCpt::new(b.clone());
    let given = assign(&[(&a, TRUE)]);
    b_given_a.set(TRUE, &given, 0.8).unwrap();
    b_given_a.set(FALSE, &given, 0.2).unwrap();
    let given = assign(&[(&a, FALSE)]);
    b_given_a.set(TRUE, &given, 0.4).unwrap();
    b_given_a.set(FALSE, &given, 0.6).unwrap();
    network.connect(&b, &[a.clone()], b_given_a).unwrap();

    (network, a, b)
}

#[test]
fn test_two_variable_scenario() {
    let (network, a, b) = a_to_b();

    assert_eq!(network.size(), 2);
    assert_eq!(network.get_variables_sorted_topologically(), vec![a.clone(), b.clone()]);
    assert_eq!(network.get_probability(&b, &assign(&[(&a, TRUE), (&b, TRUE)])).unwrap(), 0.8);
    assert_eq!(network.get_probability(&b, &assign(&[(&a, FALSE), (&b, FALSE)])).unwrap(), 0.6);
    assert_eq!(network.get_probability(&a, &assign(&[(&a, FALSE)])).unwrap(), 0.4);

    let just_b: ArraySet<Var> = [b.clone()].into_iter().collect();
    let just_a: ArraySet<Var> = [a.clone()].into_iter().collect();
    assert_eq!(network.get_children(&a).unwrap(), just_b);
    assert_eq!(network.get_parents(&b).unwrap(), just_a);
    assert!(network.get_parents(&a).unwrap().is_empty());
}

#[test]
fn test_lookup_by_name_returns_same_identity() {
    let (network, a, _) = a_to_b();
    let found = network.get_variable_by_name("A").unwrap();
    assert!(found.ptr_eq(&a));
    assert_eq!(
        network.get_variable_by_name("C").unwrap_err(),
        NetworkError::NameNotFound("C".to_string())
    );
}

#[test]
fn test_copy_is_independent() {
    let (network, a, b) = a_to_b();
    let mut copy = network.copy().unwrap();

    assert_eq!(copy.get_variables_sorted_topologically(), network.get_variables_sorted_topologically());
    assert_eq!(copy.get_parents(&b).unwrap(), network.get_parents(&b).unwrap());

    let e = assign(&[(&a, TRUE), (&b, TRUE)]);
    copy.set_probability(&b, &e, 0.5).unwrap();
    assert_eq!(copy.get_probability(&b, &e).unwrap(), 0.5);
    assert_eq!(network.get_probability(&b, &e).unwrap(), 0.8);
    assert_eq!(copy.to_string().lines().count(), network.to_string().lines().count());
}

#[test]
fn test_dump_of_scenario() {
    let (network, _, _) = a_to_b();
    let expected = "A <- \n\
                    {} -> true: 0.6, false: 0.4\n\
                    B <- A \n\
                    {A=true} -> true: 0.8, false: 0.2\n\
                    {A=false} -> true: 0.4, false: 0.6\n";
    assert_eq!(network.to_string(), expected);
}

#[test]
fn test_configured_network_from_json() {
    let config = NetworkConfig::from_json(r#"{"capacity": 8, "render_cpts": false}"#).unwrap();
    let mut network: BayesianNetwork<NamedVariable> = BayesianNetwork::with_config(config);
    let x = VarRef::new(NamedVariable::boolean("X"));
    network.add(x.clone());
    network.connect(&x, &[], TableCpt::new(x.clone())).unwrap();
    assert_eq!(network.to_string(), "X <- \n");
}

#[test]
fn test_acyclic_validation_is_opt_in() {
    let (mut network, a, b) = a_to_b();
    assert!(network.validate_acyclic().is_ok());

    // Closing the loop is accepted by connect; only validation notices it.
    network.connect(&a, &[b.clone()], TableCpt::new(a.clone())).unwrap();
    let err = network.validate_acyclic().unwrap_err();
    assert!(matches!(err, NetworkError::CycleDetected(_)), "{}", err);
}

#[test]
fn test_sorting_a_larger_network() {
    // Classic sprinkler network, added in scrambled order.
    let names = ["WetGrass", "Sprinkler", "Cloudy", "Rain"];
    let vars: Vec<Var> = names.iter().map(|n| VarRef::new(NamedVariable::boolean(*n))).collect();
    let network_vars = vars.clone();
    let mut network: BayesianNetwork<NamedVariable> = BayesianNetwork::from_variables(network_vars);
    let by_name = |n: &str| network.get_variable_by_name(n).unwrap();
    let (wet, sprinkler, cloudy, rain) = (by_name("WetGrass"), by_name("Sprinkler"), by_name("Cloudy"), by_name("Rain"));

    network.connect(&cloudy, &[], TableCpt::new(cloudy.clone())).unwrap();
    network.connect(&sprinkler, &[cloudy.clone()], TableCpt::new(sprinkler.clone())).unwrap();
    network.connect(&rain, &[cloudy.clone()], TableCpt::new(rain.clone())).unwrap();
    network.connect(&wet, &[sprinkler.clone(), rain.clone()], TableCpt::new(wet.clone())).unwrap();

    let order: Vec<String> = network
        .get_variables_sorted_topologically()
        .iter()
        .map(|v| v.name.clone())
        .collect();
    assert_eq!(order, ["Cloudy", "Sprinkler", "Rain", "WetGrass"]);
    assert_eq!(vars.len(), network.size());
}
