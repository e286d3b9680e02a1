use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::{Parameters, AU};
use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Component tagging a distance readout with its body index
#[derive(Component)]
struct DistanceLabel(pub usize);

const WINDOW_SIZE: f32 = 700.0;
const LABEL_FONT_SIZE: f32 = 16.0;

/// World-space (meters) → screen-space (pixels) scaling factor.
/// The 2D camera keeps the origin at the window center, so this is the
/// whole world-to-screen transform.
fn scale(params: &Parameters) -> f32 {
    (params.px_per_au / AU) as f32
}

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planet Sim".into(),
                resolution: (WINDOW_SIZE, WINDOW_SIZE).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system, draw_trails_system))
        .run();
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera on a black background
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..Default::default()
        },
        ..Default::default()
    });

    let s = scale(&scenario.parameters);

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let color = Color::srgb(body.color[0], body.color[1], body.color[2]);
        let x = body.x.x as f32 * s;
        let y = body.x.y as f32 * s;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        // Every body except the reference gets a distance readout riding on
        // it; a scenario with no reference body has no readouts at all
        if scenario.system.reference.is_some() && Some(i) != scenario.system.reference {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(
                        String::new(),
                        TextStyle {
                            font_size: LABEL_FONT_SIZE,
                            color: Color::WHITE,
                            ..Default::default()
                        },
                    ),
                    transform: Transform::from_xyz(x, y, 1.0),
                    ..Default::default()
                },
                DistanceLabel(i),
            ));
        }
    }
}

/// Per-frame physics integration. One call advances simulated time by the
/// configured timestep regardless of how long the frame took.
fn physics_step_system(mut scenario: ResMut<Scenario>, mut halted: Local<bool>) {
    if *halted {
        return;
    }

    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        forces,
        ..
    } = &mut *scenario;

    // Keep the window alive on a failed step; the state is frozen at the
    // last consistent configuration
    if let Err(err) = symplectic_euler(system, forces, parameters) {
        error!("physics step failed, simulation halted: {err:#}");
        *halted = true;
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut bodies: Query<(&BodyIndex, &mut Transform), Without<DistanceLabel>>,
    mut labels: Query<(&DistanceLabel, &mut Transform, &mut Text), Without<BodyIndex>>,
) {
    let s = scale(&scenario.parameters);

    for (BodyIndex(i), mut transform) in &mut bodies {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation.x = (b.x.x as f32) * s;
            transform.translation.y = (b.x.y as f32) * s;
        }
    }

    for (DistanceLabel(i), mut transform, mut text) in &mut labels {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation.x = (b.x.x as f32) * s;
            transform.translation.y = (b.x.y as f32) * s;
            text.sections[0].value = format!("{:.0}km", b.dist_to_reference / 1000.0);
        }
    }
}

/// Draw each body's orbit history as a connected path in the body's color
fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let s = scale(&scenario.parameters);

    for body in &scenario.system.bodies {
        if body.trail.len() > 2 {
            let color = Color::srgb(body.color[0], body.color[1], body.color[2]);
            gizmos.linestrip_2d(
                body.trail.iter().map(|p| Vec2::new(p.x as f32 * s, p.y as f32 * s)),
                color,
            );
        }
    }
}
