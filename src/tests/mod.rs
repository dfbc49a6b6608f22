mod asyoutype_tests;
