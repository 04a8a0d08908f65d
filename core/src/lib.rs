mod error;
mod save_data;
mod state;
mod trajectory;
extern crate nalgebra as na;
extern crate serde;

pub use error::SaveLoadError;
pub use save_data::DataFile;
pub use state::{minimum_image, wrap_coordinate, State};
pub use trajectory::{Frame, Trajectory};

#[cfg(test)]
mod tests {
    use na::Vector3;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;
    use tempdir::TempDir;
    use crate::{minimum_image, wrap_coordinate, DataFile, SaveLoadError, State, Trajectory};

    fn test_state() -> State {
        State::new(
            vec![Vector3::new(0.1, 0.2, 0.3), Vector3::new(1.5, 0.0, 0.0)],
            vec![Vector3::new(0.1, 0.2, 0.3), Vector3::new(-1.0, 0.5, 0.0)],
            2.0,
        ).expect("Can't create state")
    }

    #[test]
    fn state_requires_aligned_vectors() {
        let state = State::new(vec![Vector3::zeros(); 3], vec![Vector3::zeros(); 2], 1.0);
        assert!(state.is_none());
        let state = State::new(vec![], vec![], 1.0).expect("Can't create state");
        assert!(state.is_empty());
    }

    #[test]
    fn boundary_conditions() {
        let mut state = test_state();
        state.positions[0] = Vector3::new(-0.5, 2.0, 7.25);
        state.positions[1] = Vector3::new(-4.25, 1.999, -1e-18);
        state.apply_boundary_conditions();
        assert_eq!(format!("{:.8}", state.positions[0].x), "1.50000000");
        assert_eq!(format!("{:.8}", state.positions[0].y), "0.00000000");
        assert_eq!(format!("{:.8}", state.positions[0].z), "1.25000000");
        assert_eq!(format!("{:.8}", state.positions[1].x), "1.75000000");
        assert_eq!(format!("{:.8}", state.positions[1].y), "1.99900000");
        assert_eq!(state.positions[1].z, 0.0);
        assert!(state.is_wrapped());
    }

    #[test]
    fn random_coordinates_always_wrap_into_box() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10000 {
            let x: f64 = rng.gen_range(-1e3..1e3);
            let wrapped = wrap_coordinate(x, 3.7);
            assert!((0.0..3.7).contains(&wrapped), "{} wrapped to {}", x, wrapped);
        }
        assert_eq!(wrap_coordinate(-f64::EPSILON * 1e-3, 10.0), 0.0);
    }

    #[test]
    fn least_r_uses_nearest_image() {
        let mut state = test_state();
        state.box_size = 10.0;
        state.positions[0] = Vector3::new(0.5, 0.5, 0.5);
        state.positions[1] = Vector3::new(9.5, 0.5, 5.0);
        let r = state.get_least_r(0, 1);
        assert_eq!(format!("{:.8}", r.x), "-1.00000000");
        assert_eq!(format!("{:.8}", r.y), "0.00000000");
        assert_eq!(format!("{:.8}", r.z), "4.50000000");
        let back = state.get_least_r(1, 0);
        assert_eq!(back, -r);
        let image = minimum_image(Vector3::new(7.5, -7.5, 12.0), 10.0);
        assert_eq!(format!("{:.8}", image.x), "-2.50000000");
        assert_eq!(format!("{:.8}", image.y), "2.50000000");
        assert_eq!(format!("{:.8}", image.z), "2.00000000");
        // half a box away on both sides stays where it is
        assert_eq!(minimum_image(Vector3::new(2.0, -2.0, 0.0), 4.0), Vector3::new(2.0, -2.0, 0.0));
        assert_eq!(minimum_image(Vector3::new(6.0, -6.0, 10.0), 4.0), Vector3::new(-2.0, 2.0, 2.0));
    }

    #[test]
    fn non_finite_positions_are_found() {
        let mut state = test_state();
        assert_eq!(state.first_non_finite_position(), None);
        state.positions[1].y = f64::NAN;
        assert_eq!(state.first_non_finite_position(), Some(1));
    }

    #[test]
    fn trajectory_keeps_independent_copies() {
        let mut state = test_state();
        let mut trajectory = Trajectory::new();
        trajectory.record(&state.positions);
        state.positions[0].x = 1.9;
        trajectory.record(&state.positions);
        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.get(0).expect("No frame")[0].x, 0.1);
        assert_eq!(trajectory.get(1).expect("No frame")[0].x, 1.9);
        assert!(trajectory.get(2).is_none());
        let path = trajectory.particle_path(0).expect("No path");
        assert_eq!(path.len(), 2);
        assert_eq!(path[1], Vector3::new(1.9, 0.2, 0.3));
        assert!(trajectory.particle_path(2).is_none());
        assert_eq!(trajectory.iter().count(), 2);
    }

    #[test]
    fn data_file_round_trip() {
        let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
        let path = temp_dir.path().join("data.json");
        let state = test_state();
        let mut trajectory = Trajectory::new();
        trajectory.record(&state.positions);
        trajectory.record(&state.positions);
        let data = DataFile::new(trajectory, state);
        data.save_to_file(&path, true).expect("Can't save data");
        let loaded = DataFile::load_from_file(&path).expect("Can't load data");
        assert_eq!(loaded, data);
        assert_eq!(loaded.particle_count(), 2);
        assert!(DataFile::load_from_file(&temp_dir.path().join("missing.json")).is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn data_file_reports_failed_write() {
        let state = test_state();
        let mut trajectory = Trajectory::new();
        trajectory.record(&state.positions);
        let data = DataFile::new(trajectory, state);
        let path = std::path::Path::new("/dev/full");
        assert!(matches!(data.save_to_file(path, false), Err(SaveLoadError::Io(_))));
        assert!(matches!(data.save_to_file(path, true), Err(SaveLoadError::Io(_))));
        assert!(matches!(data.trajectory.save_csv(path), Err(SaveLoadError::Io(_))));
    }

    #[test]
    fn trajectory_csv() {
        let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
        let path = temp_dir.path().join("trajectory.csv");
        let state = test_state();
        let mut trajectory = Trajectory::new();
        trajectory.record(&state.positions);
        trajectory.save_csv(&path).expect("Can't save csv");
        let text = std::fs::read_to_string(&path).expect("Can't read csv");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "step,particle,x,y,z");
        assert_eq!(lines[2], "0,1,1.5,0.0,0.0");
        assert_eq!(lines.len(), 3);
    }
}
