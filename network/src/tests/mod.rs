mod perceptron_tests;
